//! Errors module for the PDA counter program
//!
//! Every failure aborts the whole transaction, so none of these leave a
//! partially updated account behind.

use anchor_lang::prelude::*;

/// Custom error codes for the PDA counter program
#[error_code]
pub enum CounterError {
    /// The signer account did not sign the transaction
    #[msg("Missing signature: the signer account must sign the transaction")]
    MissingSignature,

    /// The supplied counter account is not the PDA derived from the signer
    ///
    /// This is the authorization check: a signer can only ever reach the
    /// address derived from its own key.
    #[msg("Address mismatch: counter account is not the PDA derived from the signer")]
    AddressMismatch,

    /// `initialize` was called on a counter that already exists
    #[msg("Already initialized: the counter account is already in use")]
    AlreadyInitialized,

    /// The counter account does not exist, is owned by another program, or
    /// does not hold a Counter layout
    #[msg("Not initialized: the counter account has not been initialized")]
    NotInitialized,

    /// The signer cannot cover the rent-exempt minimum of the new account
    #[msg("Insufficient funds: signer cannot pay for the counter account")]
    InsufficientFunds,

    /// Incrementing would exceed `u64::MAX`
    #[msg("Counter overflow")]
    CounterOverflow,

    /// No bump seed produced an off-curve address
    #[msg("Derivation exhausted: no valid bump seed for the counter address")]
    DerivationExhausted,
}
