//! ButtonAuction - king-of-the-hill pot with a decaying countdown
//!
//! Paying exactly `LEADERSHIP_PAYMENT_AMOUNT` while the countdown is running
//! makes the caller the leader, restarts the countdown and shortens it for the
//! next challenger. Once a countdown lapses without a challenger, the leader
//! may take the whole pot.

use odra::casper_types::bytesrepr::ToBytes;
use odra::casper_types::{CLTyped, RuntimeArgs, U512};
use odra::prelude::*;
use odra::CallDef;

use crate::callback::{Callback, CallbackKind, CALLBACK_ARG};
use crate::countdown::{self, Round, Succession, FAR_FUTURE_TIMESTAMP, MINIMAL_COUNTDOWN};
use crate::errors::Error;
use crate::events::{LeadershipTaken, PotSeeded, PotWithdrawn, StateSent};

/// ButtonAuction - holds the pot and the current leadership round
#[odra::module]
pub struct ButtonAuction {
    // Round state
    leader: Var<Address>,
    leadership_start: Var<u64>,
    countdown: Var<u64>,

    // Part of the pot that did not come from bids
    seeded: Var<U512>,
}

#[odra::module]
impl ButtonAuction {
    /// Initialize the auction
    ///
    /// # Arguments
    /// * `initial_leader` - Placeholder leader until the first bid
    /// * `initial_countdown` - Countdown (ms) the first bid decays from,
    ///   normally `INITIAL_COUNTDOWN`
    pub fn init(&mut self, initial_leader: Address, initial_countdown: u64) {
        if initial_countdown < MINIMAL_COUNTDOWN {
            self.env().revert(Error::CountdownBelowFloor);
        }
        self.leader.set(initial_leader);
        self.leadership_start.set(FAR_FUTURE_TIMESTAMP);
        self.countdown.set(initial_countdown);
        self.seeded.set(U512::zero());
    }

    // ============ CORE FUNCTIONS ============

    /// Pay the leadership fee and become the leader
    #[odra(payable)]
    pub fn default(&mut self) {
        let succession = self.plan_succession();
        self.apply_succession(succession);
    }

    /// Claim the whole pot after the countdown has lapsed
    pub fn withdraw(&mut self) -> U512 {
        let caller = self.env().caller();

        if caller != self.leader() {
            self.env().revert(Error::NotLeader);
        }

        if !self.round().has_lapsed(self.env().get_block_time()) {
            self.env().revert(Error::CountdownNotElapsed);
        }

        // The round itself is left untouched: its window has lapsed, so the
        // next bid is judged against it and the leader keeps their title.
        let amount = self.env().self_balance();
        self.seeded.set(U512::zero());
        if !amount.is_zero() {
            self.env().transfer_tokens(&caller, &amount);
        }

        self.env().emit_event(PotWithdrawn {
            leader: caller,
            amount,
        });

        amount
    }

    /// Add value to the pot before the first bid
    ///
    /// Seeded value is paid out with the pot but does not count toward the
    /// balance weight, so it never changes how fast the countdown decays.
    #[odra(payable)]
    pub fn seed(&mut self) {
        if self.has_started() {
            self.env().revert(Error::AuctionStarted);
        }

        let amount = self.env().attached_value();
        if amount.is_zero() {
            self.env().revert(Error::AmountMustBePositive);
        }

        let seeded = self.seeded.get_or_default() + amount;
        self.seeded.set(seeded);

        self.env().emit_event(PotSeeded {
            sponsor: self.env().caller(),
            amount,
            seeded,
        });
    }

    // ============ CALLBACK READS ============

    /// Push the current leader to `callback`
    pub fn get_leader(&mut self, callback: Callback) {
        let leader = self.leader();
        self.send(callback, CallbackKind::Address, leader);
    }

    /// Push the current leadership start (ms) to `callback`
    pub fn get_leadership_start_timestamp(&mut self, callback: Callback) {
        let leadership_start = self.leadership_start();
        self.send(callback, CallbackKind::Timestamp, leadership_start);
    }

    /// Push the current countdown length (ms) to `callback`
    pub fn get_countdown(&mut self, callback: Callback) {
        let countdown = self.countdown();
        self.send(callback, CallbackKind::Duration, countdown);
    }

    // ============ VIEW FUNCTIONS ============

    pub fn leader(&self) -> Address {
        self.leader
            .get()
            .unwrap_or_revert_with(&self.env(), Error::LeaderNotSet)
    }

    pub fn leadership_start(&self) -> u64 {
        self.leadership_start.get_or_default()
    }

    pub fn countdown(&self) -> u64 {
        self.countdown.get_or_default()
    }

    /// First block time at which the current window is closed
    pub fn deadline(&self) -> u64 {
        self.round().deadline()
    }

    pub fn pot(&self) -> U512 {
        self.env().self_balance()
    }

    pub fn seeded(&self) -> U512 {
        self.seeded.get_or_default()
    }

    // ============ INTERNAL FUNCTIONS ============

    /// A bid has been accepted at some point; the placeholder start is gone
    fn has_started(&self) -> bool {
        self.leadership_start() != FAR_FUTURE_TIMESTAMP
    }

    fn round(&self) -> Round {
        Round::new(self.leadership_start(), self.countdown())
    }

    /// Validate the incoming bid against the current round. Writes nothing.
    fn plan_succession(&self) -> Succession {
        let env = self.env();
        countdown::succession(
            &self.round(),
            env.get_block_time(),
            env.attached_value(),
            env.self_balance(),
            self.seeded(),
        )
        .unwrap_or_else(|error| env.revert(error))
    }

    fn apply_succession(&mut self, succession: Succession) {
        let leader = self.env().caller();
        let Succession {
            round,
            weight,
            countdown_drop,
        } = succession;

        self.leader.set(leader);
        self.leadership_start.set(round.leadership_start);
        self.countdown.set(round.countdown);

        self.env().emit_event(LeadershipTaken {
            leader,
            leadership_start: round.leadership_start,
            countdown: round.countdown,
            countdown_drop,
            weight,
            pot: self.env().self_balance(),
        });
    }

    /// Call the destination entry point with `value`. A failure there
    /// reverts this whole call.
    fn send<T: CLTyped + ToBytes>(&self, callback: Callback, kind: CallbackKind, value: T) {
        if !callback.accepts(&kind) {
            self.env().revert(Error::CallbackKindMismatch);
        }

        let mut args = RuntimeArgs::new();
        args.insert(CALLBACK_ARG, value)
            .unwrap_or_revert_with(&self.env(), Error::CallbackEncoding);

        self.env().call_contract::<()>(
            callback.contract,
            CallDef::new(callback.entry_point.clone(), true, args),
        );

        self.env().emit_event(StateSent {
            destination: callback.contract,
            entry_point: callback.entry_point,
            kind,
        });
    }
}
