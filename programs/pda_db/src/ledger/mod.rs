//! # Ledger Module
//!
//! The slice of the hosting runtime the counter handlers depend on: reading
//! accounts, checking signatures, creating PDA accounts and writing data.
//! On-chain this is backed by the instruction's `AccountInfo`s; off-chain an
//! in-memory ledger lets the same handlers run in plain unit tests.

use anchor_lang::prelude::*;

pub mod account_info;
#[cfg(not(target_os = "solana"))]
pub mod memory;

pub use account_info::AccountInfoLedger;
#[cfg(not(target_os = "solana"))]
pub use memory::MemoryLedger;

/// Copy of an account's state as seen by the handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

impl AccountSnapshot {
    /// A wallet-style account: lamports only, owned by the System Program
    pub fn system(lamports: u64) -> Self {
        Self {
            lamports,
            owner: anchor_lang::system_program::ID,
            data: Vec::new(),
        }
    }

    /// True when the account holds lamports but was never allocated or assigned
    pub fn is_unallocated(&self) -> bool {
        self.owner == anchor_lang::system_program::ID && self.data.is_empty()
    }
}

/// Runtime operations used by the counter processor
pub trait Ledger {
    /// Load the account at `address`. `None` means the address holds no
    /// lamports, i.e. the account does not exist.
    fn load(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>>;

    /// Whether `key` signed the current transaction
    fn is_signer(&self, key: &Pubkey) -> bool;

    /// Rent-exempt minimum balance for an account of `space` bytes
    fn minimum_balance(&self, space: usize) -> Result<u64>;

    /// Fund `address` with `lamports` from `payer`, allocate `space` bytes and
    /// assign it to `owner`. `signer_seeds` (bump included) authorize the PDA.
    fn create_account(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        lamports: u64,
        space: usize,
        owner: &Pubkey,
        signer_seeds: &[&[u8]],
    ) -> Result<()>;

    /// Overwrite the leading bytes of the account data at `address`
    fn write(&mut self, address: &Pubkey, data: &[u8]) -> Result<()>;

    /// Search for a program-derived address. `None` if every bump is on-curve.
    fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Option<(Pubkey, u8)> {
        Pubkey::try_find_program_address(seeds, program_id)
    }
}
