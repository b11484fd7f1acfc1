//! Events for the button auction (CEP-88 compliant)

use odra::prelude::*;
use odra::casper_types::U512;

use crate::callback::CallbackKind;

/// Emitted when a caller pays in and becomes the leader
#[odra::event]
pub struct LeadershipTaken {
    pub leader: Address,
    pub leadership_start: u64,
    pub countdown: u64,
    pub countdown_drop: u64,
    pub weight: U512,
    pub pot: U512,
}

/// Emitted when the leader claims the pot
#[odra::event]
pub struct PotWithdrawn {
    pub leader: Address,
    pub amount: U512,
}

/// Emitted when someone adds value to the pot without bidding
#[odra::event]
pub struct PotSeeded {
    pub sponsor: Address,
    pub amount: U512,
    pub seeded: U512,
}

/// Emitted when a piece of auction state is pushed to a callback
#[odra::event]
pub struct StateSent {
    pub destination: Address,
    pub entry_point: String,
    pub kind: CallbackKind,
}
