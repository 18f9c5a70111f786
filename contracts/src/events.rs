//! Notifications published on the host event stream.

use soroban_sdk::{contractevent, Address};

/// A player was admitted to the open round.
#[contractevent]
pub struct RaffleEntered {
    #[topic]
    pub player: Address,
    pub amount: i128,
}

/// A draw started; `request_id` is the id the coordinator will call back with.
#[contractevent]
pub struct WinnerRequested {
    #[topic]
    pub request_id: u64,
    pub round: u32,
}

#[contractevent]
pub struct WinnerPicked {
    #[topic]
    pub winner: Address,
    pub request_id: u64,
    pub prize: i128,
}
