//! Instructions module for the PDA counter program
//!
//! Each handler adapts its Anchor accounts to an [`AccountInfoLedger`] and
//! delegates the state transition to [`crate::processor`].
//!
//! [`AccountInfoLedger`]: crate::ledger::AccountInfoLedger

pub mod increment;
pub mod initialize;

pub use increment::*;
pub use initialize::*;
