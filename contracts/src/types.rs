//! Type definitions for the raffle.

use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    State,
    Players,
    PoolBalance,
    LastTimestamp,
    RecentWinner,
    OutstandingRequest,
    DrawCount,
    /// Id of the most recently paid-out draw
    LastResolvedRequest,
}

/// Round state. `Open` accepts entries, `Calculating` waits on the oracle.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Immutable settings fixed by `initialize`.
///
/// `key_hash`, `subscription_id`, `request_confirmations`,
/// `callback_gas_limit` and `num_words` are opaque to the raffle and passed
/// through to the coordinator on every request.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    pub token: Address,
    pub oracle: Address,
    pub entrance_fee: i128,
    pub interval: u64,           // Seconds between draws
    pub key_hash: BytesN<32>,    // Gas lane
    pub subscription_id: u64,
    pub request_confirmations: u32,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Answer to "may a draw start now?" plus the inputs it was computed from.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub state: RaffleState,
    pub player_count: u32,
    pub balance: i128,
    pub elapsed: u64,
}
