//! Events module for the PDA counter program
//!
//! Events let indexers follow counter activity without re-reading accounts.

use anchor_lang::prelude::*;

/// Event emitted when a counter account is created
///
/// # Fields
/// * `counter` - The PDA holding the counter
/// * `signer` - The signer the PDA was derived from (and who paid for it)
/// * `count` - The initial value
/// * `timestamp` - Unix timestamp of the initialization
#[event]
pub struct CounterInitialized {
    pub counter: Pubkey,
    pub signer: Pubkey,
    pub count: u64,
    pub timestamp: i64,
}

/// Event emitted when a counter is incremented
#[event]
pub struct CounterIncremented {
    /// The PDA holding the counter
    pub counter: Pubkey,
    /// The signer the PDA was derived from
    pub signer: Pubkey,
    /// The value before incrementing
    pub previous_count: u64,
    /// The value after incrementing
    pub count: u64,
    /// Timestamp when the increment occurred
    pub timestamp: i64,
}
