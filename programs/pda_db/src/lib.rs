//! # PDA Counter Program
//!
//! Stores one counter per signer at a program-derived address seeded with
//! `"count_data"` and the signer's key. Authorization is structural: every
//! mutating instruction re-derives the address from the signer and refuses any
//! other account, so there is no stored owner field to spoof.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod processor;
pub mod state;

#[cfg(not(target_os = "solana"))]
pub mod client;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;

declare_id!("5PHVkoS94fLyX12QvKdYTwsyVAdPSPXv668UK13d41Bk");

#[program]
pub mod pda_db {
    use super::*;

    /// Create the signer's counter account and set its starting value.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `count` - Initial counter value
    ///
    /// # Errors
    /// * `MissingSignature` - The signer account did not sign
    /// * `AddressMismatch` - The counter account is not the signer's PDA
    /// * `AlreadyInitialized` - The counter account already exists
    /// * `InsufficientFunds` - The signer cannot pay the rent-exempt minimum
    pub fn initialize(ctx: Context<Initialize>, count: u64) -> Result<()> {
        instructions::initialize(ctx, count)
    }

    /// Add one to the signer's counter.
    ///
    /// # Errors
    /// * `MissingSignature` - The signer account did not sign
    /// * `AddressMismatch` - The counter account is not the signer's PDA
    /// * `NotInitialized` - The counter account was never initialized
    /// * `CounterOverflow` - The counter is already at `u64::MAX`
    pub fn increment(ctx: Context<Increment>) -> Result<()> {
        instructions::increment(ctx)
    }
}
