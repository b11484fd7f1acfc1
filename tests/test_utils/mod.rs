//! Test utilities and helpers for button auction tests

use odra::casper_types::U512;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;

use button::button_auction::{ButtonAuction, ButtonAuctionHostRef, ButtonAuctionInitArgs};
use button::viewer::{Viewer, ViewerHostRef, ViewerInitArgs};

pub use button::countdown::{
    FAR_FUTURE_TIMESTAMP, INITIAL_COUNTDOWN, LEADERSHIP_PAYMENT_AMOUNT, MINIMAL_COUNTDOWN,
};

/// Constants for testing
pub const CSPR: u64 = 1_000_000_000; // 1 CSPR in motes (9 decimals)
pub const SECOND_MS: u64 = 1000;
pub const HOUR_MS: u64 = 60 * 60 * SECOND_MS;

/// Accounts used across the tests
pub struct Players {
    pub creator: Address,
    pub alice: Address,
    pub bob: Address,
    pub dan: Address,
}

/// Exact leadership fee as U512
pub fn fee() -> U512 {
    U512::from(LEADERSHIP_PAYMENT_AMOUNT)
}

/// Deploy a fresh auction with `creator` as the placeholder leader
pub fn setup() -> (HostEnv, ButtonAuctionHostRef, Players) {
    setup_with_countdown(INITIAL_COUNTDOWN)
}

/// Same as `setup`, starting from a custom countdown
pub fn setup_with_countdown(initial_countdown: u64) -> (HostEnv, ButtonAuctionHostRef, Players) {
    let env = odra_test::env();

    let players = Players {
        creator: env.get_account(0),
        alice: env.get_account(1),
        bob: env.get_account(2),
        dan: env.get_account(3),
    };

    env.set_caller(players.creator);
    let auction = ButtonAuction::deploy(
        &env,
        ButtonAuctionInitArgs {
            initial_leader: players.creator,
            initial_countdown,
        },
    );

    (env, auction, players)
}

/// Deploy a viewer whose placeholder leader is `initial_leader`
pub fn deploy_viewer(env: &HostEnv, initial_leader: Address) -> ViewerHostRef {
    Viewer::deploy(env, ViewerInitArgs { initial_leader })
}

/// Pay the exact fee as `who`
pub fn bid(env: &HostEnv, auction: &mut ButtonAuctionHostRef, who: Address) {
    env.set_caller(who);
    auction.with_tokens(fee()).default();
}

/// Contract balance of the auction
pub fn pot_of(env: &HostEnv, auction: &ButtonAuctionHostRef) -> U512 {
    env.balance_of(&auction.address())
}

/// Move block time to exactly the current deadline
pub fn advance_to_deadline(env: &HostEnv, auction: &ButtonAuctionHostRef) {
    let now = env.block_time();
    let deadline = auction.deadline();
    assert!(deadline >= now, "deadline already passed");
    env.advance_block_time(deadline - now);
}
