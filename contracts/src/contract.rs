//! Core contract implementation for the raffle.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

use crate::errors::RaffleError;
use crate::events::{RaffleEntered, WinnerPicked, WinnerRequested};
use crate::oracle::RandomnessOracleClient;
use crate::storage;
use crate::types::{RaffleConfig, RaffleState, UpkeepCheck};

#[contract]
pub struct RaffleContract;

#[contractimpl]
impl RaffleContract {
    /// Initializes the raffle with its admin and immutable config (one-time only)
    pub fn initialize(env: Env, admin: Address, config: RaffleConfig) -> Result<(), RaffleError> {
        admin.require_auth();

        if storage::is_initialized(&env) {
            return Err(RaffleError::AlreadyInitialized);
        }

        if config.entrance_fee <= 0 {
            return Err(RaffleError::InvalidEntranceFee);
        }

        if config.interval == 0 {
            return Err(RaffleError::InvalidInterval);
        }

        if config.num_words == 0 {
            return Err(RaffleError::InvalidNumWords);
        }

        storage::write_admin(&env, &admin);
        storage::write_config(&env, &config);
        storage::write_state(&env, RaffleState::Open);
        storage::write_players(&env, &Vec::new(&env));
        storage::write_pool(&env, 0);
        storage::write_last_timestamp(&env, env.ledger().timestamp());
        storage::write_draw_count(&env, 0);
        storage::extend_raffle_ttl(&env);

        Ok(())
    }

    /// Admits `player` to the open round, pulling `amount` of the fee token
    /// into the pool. Re-entry is allowed and adds another ticket.
    pub fn enter_raffle(env: Env, player: Address, amount: i128) -> Result<(), RaffleError> {
        player.require_auth();

        let config = storage::read_config(&env)?;
        storage::extend_raffle_ttl(&env);

        if amount < config.entrance_fee {
            return Err(RaffleError::InsufficientFee);
        }

        if storage::read_state(&env) != RaffleState::Open {
            return Err(RaffleError::RoundNotOpen);
        }

        let pool = storage::read_pool(&env)
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        let mut players = storage::read_players(&env);
        players.push_back(player.clone());

        token::Client::new(&env, &config.token).transfer(
            &player,
            &env.current_contract_address(),
            &amount,
        );

        storage::write_players(&env, &players);
        storage::write_pool(&env, pool);

        log!(&env, "raffle entered", player.clone(), amount, players.len());
        RaffleEntered { player, amount }.publish(&env);

        Ok(())
    }

    /// Evaluates whether a draw may start now. Read-only; keepers poll this.
    pub fn check_upkeep(env: Env) -> Result<UpkeepCheck, RaffleError> {
        let config = storage::read_config(&env)?;
        Ok(Self::_evaluate_upkeep(&env, &config))
    }

    /// Starts a draw: flips the round to `Calculating` and asks the oracle
    /// for randomness. Callable by anyone; the upkeep check is the only guard.
    pub fn perform_upkeep(env: Env) -> Result<u64, RaffleError> {
        let config = storage::read_config(&env)?;
        storage::extend_raffle_ttl(&env);

        let check = Self::_evaluate_upkeep(&env, &config);
        if !check.upkeep_needed {
            log!(
                &env,
                "upkeep not needed",
                check.balance,
                check.player_count,
                check.state as u32,
                check.elapsed
            );
            return Err(RaffleError::UpkeepNotNeeded);
        }

        // Entries close before the oracle is called.
        storage::write_state(&env, RaffleState::Calculating);

        let request_id = RandomnessOracleClient::new(&env, &config.oracle).request_random_words(
            &env.current_contract_address(),
            &config.key_hash,
            &config.subscription_id,
            &config.request_confirmations,
            &config.callback_gas_limit,
            &config.num_words,
        );

        if storage::read_last_resolved(&env) == Some(request_id) {
            log!(&env, "oracle reused request id", request_id);
            return Err(RaffleError::DuplicateRequest);
        }

        storage::write_outstanding(&env, request_id);

        let round = storage::read_draw_count(&env)
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        log!(&env, "winner requested", request_id, round, check.player_count);
        WinnerRequested { request_id, round }.publish(&env);

        Ok(request_id)
    }

    /// Oracle callback (oracle only). Picks `random_words[0] % players` as the
    /// winner, pays out the whole pool, resets the round and reopens entries.
    pub fn fulfill_random_words(
        env: Env,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<Address, RaffleError> {
        let config = storage::read_config(&env)?;

        config.oracle.require_auth();
        storage::extend_raffle_ttl(&env);

        match storage::read_outstanding(&env) {
            Some(outstanding) if outstanding == request_id => {}
            _ => {
                log!(&env, "unknown request", request_id);
                return Err(RaffleError::UnknownRequest);
            }
        }

        let random_word = random_words.get(0).ok_or(RaffleError::MissingRandomWord)?;

        // Frozen since the request: admission is closed while calculating.
        let players = storage::read_players(&env);
        let player_count = players.len();
        if player_count == 0 {
            return Err(RaffleError::IndexOutOfRange);
        }

        let winner_index = (random_word % u64::from(player_count)) as u32;
        let winner = players
            .get(winner_index)
            .ok_or(RaffleError::IndexOutOfRange)?;

        let prize = storage::read_pool(&env);
        let draw_count = storage::read_draw_count(&env)
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        let payout = token::Client::new(&env, &config.token).try_transfer(
            &env.current_contract_address(),
            &winner,
            &prize,
        );
        if !matches!(payout, Ok(Ok(()))) {
            log!(&env, "payout failed", request_id, winner.clone(), prize);
            return Err(RaffleError::PayoutFailed);
        }

        storage::write_players(&env, &Vec::new(&env));
        storage::write_pool(&env, 0);
        storage::write_state(&env, RaffleState::Open);
        storage::clear_outstanding(&env);
        storage::write_last_resolved(&env, request_id);
        storage::write_last_timestamp(&env, env.ledger().timestamp());
        storage::write_recent_winner(&env, &winner);
        storage::write_draw_count(&env, draw_count);

        log!(&env, "winner picked", winner.clone(), winner_index, prize);
        WinnerPicked {
            winner: winner.clone(),
            request_id,
            prize,
        }
        .publish(&env);

        Ok(winner)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::read_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<RaffleConfig, RaffleError> {
        storage::read_config(&env)
    }

    pub fn get_entrance_fee(env: Env) -> Result<i128, RaffleError> {
        Ok(storage::read_config(&env)?.entrance_fee)
    }

    pub fn get_interval(env: Env) -> Result<u64, RaffleError> {
        Ok(storage::read_config(&env)?.interval)
    }

    pub fn get_num_words(env: Env) -> Result<u32, RaffleError> {
        Ok(storage::read_config(&env)?.num_words)
    }

    pub fn get_request_confirmations(env: Env) -> Result<u32, RaffleError> {
        Ok(storage::read_config(&env)?.request_confirmations)
    }

    pub fn get_raffle_state(env: Env) -> RaffleState {
        storage::read_state(&env)
    }

    /// Returns the player at `index` in entry order
    pub fn get_player(env: Env, index: u32) -> Result<Address, RaffleError> {
        storage::read_players(&env)
            .get(index)
            .ok_or(RaffleError::IndexOutOfRange)
    }

    pub fn get_number_of_players(env: Env) -> u32 {
        storage::read_players(&env).len()
    }

    pub fn get_pool_balance(env: Env) -> i128 {
        storage::read_pool(&env)
    }

    /// Returns the close time of the last resolved draw (or of initialization)
    pub fn get_latest_timestamp(env: Env) -> u64 {
        storage::read_last_timestamp(&env)
    }

    pub fn get_recent_winner(env: Env) -> Option<Address> {
        storage::read_recent_winner(&env)
    }

    /// Returns the request id the raffle is waiting on, if a draw is in progress
    pub fn get_outstanding_request(env: Env) -> Option<u64> {
        storage::read_outstanding(&env)
    }

    /// Returns how many draws have been paid out
    pub fn get_draw_count(env: Env) -> u32 {
        storage::read_draw_count(&env)
    }

    /// Eligibility predicate shared by `check_upkeep` and `perform_upkeep`
    fn _evaluate_upkeep(env: &Env, config: &RaffleConfig) -> UpkeepCheck {
        let state = storage::read_state(env);
        let player_count = storage::read_players(env).len();
        let balance = storage::read_pool(env);
        let elapsed = env
            .ledger()
            .timestamp()
            .saturating_sub(storage::read_last_timestamp(env));

        let is_open = state == RaffleState::Open;
        let time_passed = elapsed >= config.interval;
        let has_players = player_count > 0;
        let has_balance = balance > 0;

        UpkeepCheck {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            state,
            player_count,
            balance,
            elapsed,
        }
    }
}
