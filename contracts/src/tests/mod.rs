//! Test modules for the raffle contract.


use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    token, Address, BytesN, Env, Event, Map, Symbol, TryFromVal, Val, Vec,
};

use crate::contract::{RaffleContract, RaffleContractClient};
use crate::types::RaffleConfig;
use mocks::{MockCoordinator, MockCoordinatorClient};

pub const ENTRANCE_FEE: i128 = 10_000_000; // 1 token at 7 decimals
pub const INTERVAL: u64 = 30;
pub const STARTING_BALANCE: i128 = 1_000_000_000;

pub struct Setup<'a> {
    pub admin: Address,
    pub raffle_id: Address,
    pub raffle: RaffleContractClient<'a>,
    pub coordinator: MockCoordinatorClient<'a>,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
}

impl Setup<'_> {
    /// Generates a player holding `STARTING_BALANCE` of the fee token
    pub fn funded_player(&self, env: &Env) -> Address {
        let player = Address::generate(env);
        self.token_admin.mint(&player, &STARTING_BALANCE);
        player
    }

    /// Enters a fresh player and returns it
    pub fn enter_new_player(&self, env: &Env) -> Address {
        let player = self.funded_player(env);
        self.raffle.enter_raffle(&player, &ENTRANCE_FEE);
        player
    }

    /// Enters one player, waits out the interval and starts the draw
    pub fn start_draw(&self, env: &Env) -> u64 {
        self.enter_new_player(env);
        advance_time(env, INTERVAL + 1);
        self.raffle.perform_upkeep()
    }
}

pub fn test_config(
    env: &Env,
    token: &Address,
    oracle: &Address,
    entrance_fee: i128,
    interval: u64,
) -> RaffleConfig {
    RaffleConfig {
        token: token.clone(),
        oracle: oracle.clone(),
        entrance_fee,
        interval,
        key_hash: BytesN::from_array(env, &[7u8; 32]),
        subscription_id: 42,
        request_confirmations: 3,
        callback_gas_limit: 500_000,
        num_words: 1,
    }
}

/// Deploys token, coordinator and an initialized raffle; mocks all auths
pub fn setup_with(env: &Env, entrance_fee: i128, interval: u64) -> Setup<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let coordinator_id = env.register(MockCoordinator, ());
    let raffle_id = env.register(RaffleContract, ());

    let raffle = RaffleContractClient::new(env, &raffle_id);
    raffle.initialize(
        &admin,
        &test_config(env, &token_id, &coordinator_id, entrance_fee, interval),
    );

    Setup {
        admin,
        raffle_id,
        raffle,
        coordinator: MockCoordinatorClient::new(env, &coordinator_id),
        token: token::Client::new(env, &token_id),
        token_admin: token::StellarAssetClient::new(env, &token_id),
    }
}

pub fn setup(env: &Env) -> Setup<'_> {
    setup_with(env, ENTRANCE_FEE, INTERVAL)
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

pub fn words(env: &Env, word: u64) -> Vec<u64> {
    Vec::from_array(env, [word])
}

/// Events the raffle published during the last top-level call, oldest first
pub fn raffle_events(env: &Env, raffle_id: &Address) -> Vec<(Vec<Val>, Val)> {
    let mut events = Vec::new(env);
    for (contract, topics, data) in env.events().all().iter() {
        if contract == *raffle_id {
            events.push_back((topics, data));
        }
    }
    events
}

/// Asserts a published event carries the same topics and data as `expected`
pub fn assert_event(env: &Env, published: (Vec<Val>, Val), expected: impl Event) {
    let (topics, data) = published;
    assert_eq!(topics, expected.topics(env));

    let data = Map::<Symbol, Val>::try_from_val(env, &data).unwrap();
    let expected_data = Map::<Symbol, Val>::try_from_val(env, &expected.data(env)).unwrap();
    assert_eq!(data, expected_data);
}
