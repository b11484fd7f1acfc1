//! Error definitions for the button auction

use odra::prelude::*;

/// Button auction errors
#[odra::odra_error]
pub enum Error {
    /// Attached value is not exactly the leadership payment
    PaymentMismatch = 1,
    /// The current leadership window has already elapsed
    LeadershipWindowClosed = 2,
    /// Caller is not the current leader
    NotLeader = 3,
    /// The countdown has not lapsed yet
    CountdownNotElapsed = 4,
    /// Callback destination expects a different kind of value
    CallbackKindMismatch = 5,
    /// Pot is below one weight unit, countdown drop is undefined
    ZeroBalanceWeight = 6,
    /// Amount must be greater than zero
    AmountMustBePositive = 7,
    /// Callback argument could not be encoded
    CallbackEncoding = 8,
    /// Leader address not set
    LeaderNotSet = 9,
    /// Seeding is closed once the first bid has been made
    AuctionStarted = 10,
    /// Initial countdown is below the countdown floor
    CountdownBelowFloor = 11,
}
