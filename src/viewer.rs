//! Viewer - passive sink for state pushed by the button auction
//!
//! Stores whatever it is sent. It is not authoritative; any contract exposing
//! the same three entry points can stand in for it.

use odra::prelude::*;

use crate::countdown::{FAR_FUTURE_TIMESTAMP, INITIAL_COUNTDOWN};

#[odra::module]
pub struct Viewer {
    leader: Var<Address>,
    leadership_start: Var<u64>,
    countdown: Var<u64>,
}

#[odra::module]
impl Viewer {
    pub fn init(&mut self, initial_leader: Address) {
        self.leader.set(initial_leader);
        self.leadership_start.set(FAR_FUTURE_TIMESTAMP);
        self.countdown.set(INITIAL_COUNTDOWN);
    }

    pub fn receive_leader(&mut self, value: Address) {
        self.leader.set(value);
    }

    pub fn receive_leadership_start_timestamp(&mut self, value: u64) {
        self.leadership_start.set(value);
    }

    pub fn receive_countdown(&mut self, value: u64) {
        self.countdown.set(value);
    }

    pub fn leader(&self) -> Option<Address> {
        self.leader.get()
    }

    pub fn leadership_start(&self) -> u64 {
        self.leadership_start.get_or_default()
    }

    pub fn countdown(&self) -> u64 {
        self.countdown.get_or_default()
    }
}
