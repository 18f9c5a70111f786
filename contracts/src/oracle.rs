//! Interface of the VRF coordinator the raffle requests randomness from.
//!
//! Only the request half lives here. The coordinator answers later by
//! invoking `fulfill_random_words` on the raffle with the same request id.

use soroban_sdk::{contractclient, Address, BytesN, Env};

#[contractclient(name = "RandomnessOracleClient")]
pub trait RandomnessOracle {
    /// Queues a randomness request on behalf of `consumer` and returns its id.
    fn request_random_words(
        env: Env,
        consumer: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}
