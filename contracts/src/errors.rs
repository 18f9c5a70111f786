//! Contract error types for the raffle.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RaffleError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Entrance fee must be greater than zero
    InvalidEntranceFee = 3,
    /// Draw interval must be greater than zero
    InvalidInterval = 4,
    /// At least one random word must be requested
    InvalidNumWords = 5,
    /// Paid amount is below the entrance fee
    InsufficientFee = 6,
    /// A draw is in progress, entries are closed
    RoundNotOpen = 7,
    /// Draw conditions not met (see `check_upkeep` for the diagnostics)
    UpkeepNotNeeded = 8,
    /// Fulfillment does not match the outstanding request
    UnknownRequest = 9,
    /// No player at that index
    IndexOutOfRange = 10,
    /// Prize transfer to the winner failed; round stays in `Calculating`
    PayoutFailed = 11,
    /// Fulfillment carried no random words
    MissingRandomWord = 12,
    /// Oracle reused a request id that was already resolved
    DuplicateRequest = 13,
    /// Arithmetic overflow occurred
    Overflow = 14,
}
