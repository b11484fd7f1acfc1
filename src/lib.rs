//! Button - a king-of-the-hill pot auction for Casper Network
//!
//! This crate provides:
//! - `ButtonAuction`, where paying a fixed fee makes the caller the leader
//!   and shortens the countdown for the next challenger
//! - A pot the leader can claim once the countdown lapses unchallenged
//! - Callback reads that push auction state to other contracts
//! - `Viewer`, a sink contract for those callbacks

#![no_std]

extern crate alloc;

pub mod button_auction;
pub mod callback;
pub mod countdown;
pub mod errors;
pub mod events;
pub mod viewer;

// Re-export main types for external use
pub use button_auction::ButtonAuction;
pub use callback::{Callback, CallbackKind};
pub use errors::*;
pub use events::*;
pub use viewer::Viewer;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use button_auction::{ButtonAuctionHostRef, ButtonAuctionInitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use viewer::{ViewerHostRef, ViewerInitArgs};
