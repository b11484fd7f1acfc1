//! Countdown arithmetic for the button auction
//!
//! All amounts are motes and all times are milliseconds. Nothing here touches
//! the host; the contract feeds in the block time, the attached value and its
//! own balance and applies whatever comes back.

use odra::casper_types::U512;

use crate::errors::Error;

/// Exact payment required to take leadership (0.2 of a whole coin unit)
pub const LEADERSHIP_PAYMENT_AMOUNT: u64 = 200_000;
/// Decay pressure: 3 hours
pub const COUNTDOWN_DROP_FACTOR: u64 = 3 * 60 * 60 * 1000;
/// Countdown floor: 5 minutes
pub const MINIMAL_COUNTDOWN: u64 = 5 * 60 * 1000;
/// Motes per weight point (a tenth of a whole coin unit)
pub const WEIGHT_UNIT: u64 = 100_000;
/// Countdown at origination: 24 hours
pub const INITIAL_COUNTDOWN: u64 = 24 * 60 * 60 * 1000;
/// Placeholder leadership start, far enough ahead that nobody can withdraw
pub const FAR_FUTURE_TIMESTAMP: u64 = 999_999_999_999_999;

/// Leadership window: `[leadership_start, leadership_start + countdown)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub leadership_start: u64,
    pub countdown: u64,
}

impl Round {
    pub fn new(leadership_start: u64, countdown: u64) -> Self {
        Self {
            leadership_start,
            countdown,
        }
    }

    /// First instant at which the window is closed
    pub fn deadline(&self) -> u64 {
        self.leadership_start.saturating_add(self.countdown)
    }

    /// A challenger may still take over
    pub fn is_open(&self, now: u64) -> bool {
        self.deadline() > now
    }

    /// The leader may claim the pot. Strict: at `now == deadline` the window
    /// is closed but the pot is still locked.
    pub fn has_lapsed(&self, now: u64) -> bool {
        self.deadline() < now
    }
}

/// Outcome of a successful bid, computed before anything is written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Succession {
    pub round: Round,
    pub weight: U512,
    pub countdown_drop: u64,
}

/// Weight points of the bid-funded part of the pot. Seeded value does not count.
pub fn balance_weight(pot: U512, seeded: U512) -> U512 {
    pot.saturating_sub(seeded) / U512::from(WEIGHT_UNIT)
}

/// How much the countdown shrinks for the given weight.
///
/// Heavier pots shrink the countdown more slowly. Always at least one
/// millisecond for a non-zero weight; `None` for a zero weight.
pub fn countdown_drop(weight: U512) -> Option<u64> {
    if weight.is_zero() {
        return None;
    }
    let drop = (U512::from(COUNTDOWN_DROP_FACTOR) + weight) / weight;
    // weight >= 1 bounds drop by COUNTDOWN_DROP_FACTOR + 1
    Some(drop.as_u64())
}

/// Shrink `current` by `drop`, never going to or below the floor
pub fn decayed_countdown(current: u64, drop: u64) -> u64 {
    match current.checked_sub(drop) {
        Some(next) if next > MINIMAL_COUNTDOWN => next,
        _ => MINIMAL_COUNTDOWN,
    }
}

/// Validate a bid and compute the next round.
///
/// `pot` is the contract balance with `payment` already credited.
pub fn succession(
    round: &Round,
    now: u64,
    payment: U512,
    pot: U512,
    seeded: U512,
) -> Result<Succession, Error> {
    if payment != U512::from(LEADERSHIP_PAYMENT_AMOUNT) {
        return Err(Error::PaymentMismatch);
    }
    if !round.is_open(now) {
        return Err(Error::LeadershipWindowClosed);
    }

    let weight = balance_weight(pot, seeded);
    let countdown_drop = countdown_drop(weight).ok_or(Error::ZeroBalanceWeight)?;

    Ok(Succession {
        round: Round::new(now, decayed_countdown(round.countdown, countdown_drop)),
        weight,
        countdown_drop,
    })
}
