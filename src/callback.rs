//! Typed callback destinations for pushing auction state to other contracts
//!
//! A Casper entry point cannot hand a value back to a caller that is itself
//! an off-chain observer, so reads are served by calling a destination entry
//! point chosen by the requester. The destination declares which kind of
//! value it accepts and the auction refuses to send anything else.

use odra::prelude::*;

/// Name of the single argument every callback entry point takes
pub const CALLBACK_ARG: &str = "value";

/// Kind of value a callback entry point accepts
#[odra::odra_type]
pub enum CallbackKind {
    /// An `Address`
    Address,
    /// A block timestamp in milliseconds (`u64`)
    Timestamp,
    /// A duration in milliseconds (`u64`)
    Duration,
}

/// Destination for a pushed value
#[odra::odra_type]
pub struct Callback {
    pub contract: Address,
    pub entry_point: String,
    pub kind: CallbackKind,
}

impl Callback {
    pub fn new(contract: Address, entry_point: &str, kind: CallbackKind) -> Self {
        Self {
            contract,
            entry_point: entry_point.to_string(),
            kind,
        }
    }

    /// Destination accepting an address
    pub fn address(contract: Address, entry_point: &str) -> Self {
        Self::new(contract, entry_point, CallbackKind::Address)
    }

    /// Destination accepting a timestamp
    pub fn timestamp(contract: Address, entry_point: &str) -> Self {
        Self::new(contract, entry_point, CallbackKind::Timestamp)
    }

    /// Destination accepting a duration
    pub fn duration(contract: Address, entry_point: &str) -> Self {
        Self::new(contract, entry_point, CallbackKind::Duration)
    }

    pub fn accepts(&self, kind: &CallbackKind) -> bool {
        &self.kind == kind
    }
}
