//! Typed access to the raffle's persistent entries.
//!
//! Every write extends the entry's TTL, and every mutating call re-extends
//! the entries it did not write, so config and round data outlive quiet
//! stretches between draws.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::RaffleError;
use crate::types::{DataKey, RaffleConfig, RaffleState};

/// Persistent TTL in ledgers (~30 days at 5s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Contract instance TTL in ledgers, same horizon as the persistent entries.
pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    bump(env, &DataKey::Admin);
}

pub fn read_config(env: &Env) -> Result<RaffleConfig, RaffleError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(RaffleError::NotInitialized)
}

pub fn write_config(env: &Env, config: &RaffleConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    bump(env, &DataKey::Config);
}

pub fn read_state(env: &Env) -> RaffleState {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .unwrap_or(RaffleState::Open)
}

pub fn write_state(env: &Env, state: RaffleState) {
    env.storage().persistent().set(&DataKey::State, &state);
    bump(env, &DataKey::State);
}

pub fn read_players(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Players)
        .unwrap_or(Vec::new(env))
}

pub fn write_players(env: &Env, players: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Players, players);
    bump(env, &DataKey::Players);
}

pub fn read_pool(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PoolBalance)
        .unwrap_or(0)
}

pub fn write_pool(env: &Env, amount: i128) {
    env.storage().persistent().set(&DataKey::PoolBalance, &amount);
    bump(env, &DataKey::PoolBalance);
}

pub fn read_last_timestamp(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LastTimestamp)
        .unwrap_or(0)
}

pub fn write_last_timestamp(env: &Env, timestamp: u64) {
    env.storage().persistent().set(&DataKey::LastTimestamp, &timestamp);
    bump(env, &DataKey::LastTimestamp);
}

pub fn read_recent_winner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::RecentWinner)
}

pub fn write_recent_winner(env: &Env, winner: &Address) {
    env.storage().persistent().set(&DataKey::RecentWinner, winner);
    bump(env, &DataKey::RecentWinner);
}

pub fn read_outstanding(env: &Env) -> Option<u64> {
    env.storage().persistent().get(&DataKey::OutstandingRequest)
}

pub fn write_outstanding(env: &Env, request_id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::OutstandingRequest, &request_id);
    bump(env, &DataKey::OutstandingRequest);
}

pub fn clear_outstanding(env: &Env) {
    env.storage().persistent().remove(&DataKey::OutstandingRequest);
}

pub fn read_draw_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::DrawCount)
        .unwrap_or(0)
}

pub fn write_draw_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::DrawCount, &count);
    bump(env, &DataKey::DrawCount);
}

pub fn read_last_resolved(env: &Env) -> Option<u64> {
    env.storage().persistent().get(&DataKey::LastResolvedRequest)
}

pub fn write_last_resolved(env: &Env, request_id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::LastResolvedRequest, &request_id);
    bump(env, &DataKey::LastResolvedRequest);
}

/// Keeps the instance and every live raffle entry from expiring. Called by
/// each mutating entry point once the raffle is known to be initialized.
pub fn extend_raffle_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_LEDGERS);

    for key in [
        DataKey::Admin,
        DataKey::Config,
        DataKey::State,
        DataKey::Players,
        DataKey::PoolBalance,
        DataKey::LastTimestamp,
        DataKey::DrawCount,
        DataKey::RecentWinner,
        DataKey::OutstandingRequest,
        DataKey::LastResolvedRequest,
    ] {
        if env.storage().persistent().has(&key) {
            bump(env, &key);
        }
    }
}
