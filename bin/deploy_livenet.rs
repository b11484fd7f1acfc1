//! Livenet deployment script for button contracts
//!
//! Deploys ButtonAuction and a Viewer to Casper network, then pushes the
//! initial auction state into the viewer as a smoke test.
//!
//! Run with: cargo run --bin deploy_livenet --features livenet --release

use std::str::FromStr;

use odra::host::Deployer;
use odra::prelude::{Address, Addressable};
use button::countdown::INITIAL_COUNTDOWN;
use button::{ButtonAuction, ButtonAuctionInitArgs, Callback, Viewer, ViewerInitArgs};

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    let deployer = env.caller();
    println!("Deployer address: {}", deployer.to_string());

    // Placeholder leader until the first bid, defaults to the deployer
    let initial_leader = match std::env::var("INITIAL_LEADER") {
        Ok(value) => Address::from_str(&value).expect("Invalid INITIAL_LEADER address"),
        Err(_) => deployer,
    };
    println!("Initial leader: {}", initial_leader.to_string());

    println!("\n=== Deploying ButtonAuction ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas
    let mut auction = ButtonAuction::deploy(
        &env,
        ButtonAuctionInitArgs {
            initial_leader,
            initial_countdown: INITIAL_COUNTDOWN,
        },
    );
    let auction_address = auction.address();
    println!("ButtonAuction deployed at: {}", auction_address.to_string());

    println!("\n=== Deploying Viewer ===");
    env.set_gas(150_000_000_000u64); // 150 CSPR gas
    let viewer = Viewer::deploy(&env, ViewerInitArgs { initial_leader: deployer });
    let viewer_address = viewer.address();
    println!("Viewer deployed at: {}", viewer_address.to_string());

    println!("\n=== Pushing leader to Viewer ===");
    env.set_gas(5_000_000_000u64); // 5 CSPR gas
    auction.get_leader(Callback::address(viewer_address, "receive_leader"));
    println!("Viewer leader: {:?}", viewer.leader());

    println!("\n=== Deployment Summary ===");
    println!("ButtonAuction: {}", auction_address.to_string());
    println!("Viewer: {}", viewer_address.to_string());
    println!("Countdown (ms): {}", auction.countdown());
    println!("\nDeployment complete!");
}
