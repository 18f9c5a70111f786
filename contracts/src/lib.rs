#![no_std]
//! # Verifiable Raffle
//!
//! Soroban lottery whose winner is drawn from an external VRF coordinator.
//! Players pay a fixed entrance fee into a shared pool; once the draw interval
//! has elapsed an automation keeper triggers a randomness request, and the
//! coordinator's callback picks the winner and pays out the whole pool.
//!
//! ## Round lifecycle
//! - `Open`: entries accepted, keeper polls `check_upkeep`
//! - `perform_upkeep` flips to `Calculating` and records the request id
//! - `fulfill_random_words` with that id pays the winner and reopens
//!
//! A callback carrying any other request id is rejected, so stale or replayed
//! fulfillments can never touch a later round.

mod contract;
mod errors;
mod events;
mod oracle;
mod storage;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{RaffleContract, RaffleContractClient};
pub use errors::RaffleError;
pub use events::{RaffleEntered, WinnerPicked, WinnerRequested};
pub use oracle::{RandomnessOracle, RandomnessOracleClient};
pub use types::{DataKey, RaffleConfig, RaffleState, UpkeepCheck};
