//! In-memory ledger for off-chain tests

use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::*;

use super::{AccountSnapshot, Ledger};

/// A simulated ledger: a map of accounts plus the signer set of the
/// transaction being executed.
///
/// `create_account` behaves like the System Program (PDA signatures are
/// verified against the seeds, balances are checked) and [`execute`] gives
/// the runtime's all-or-nothing commit.
///
/// [`execute`]: MemoryLedger::execute
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    accounts: HashMap<Pubkey, AccountSnapshot>,
    signers: HashSet<Pubkey>,
    rent: Rent,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `lamports` to `key`, creating a System-owned account if needed
    pub fn airdrop(&mut self, key: Pubkey, lamports: u64) {
        self.accounts
            .entry(key)
            .or_insert_with(|| AccountSnapshot::system(0))
            .lamports += lamports;
    }

    pub fn set_account(&mut self, key: Pubkey, account: AccountSnapshot) {
        self.accounts.insert(key, account);
    }

    pub fn account(&self, key: &Pubkey) -> Option<&AccountSnapshot> {
        self.accounts.get(key)
    }

    pub fn lamports(&self, key: &Pubkey) -> u64 {
        self.accounts.get(key).map_or(0, |account| account.lamports)
    }

    /// Mark `key` as a signer of the current transaction
    pub fn sign(&mut self, key: Pubkey) {
        self.signers.insert(key);
    }

    pub fn clear_signers(&mut self) {
        self.signers.clear();
    }

    /// Run `instruction` as one transaction. On error every account is
    /// restored to its state before the call. The signer set is cleared
    /// either way.
    pub fn execute<T>(&mut self, instruction: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let checkpoint = self.accounts.clone();
        let result = instruction(self);
        if result.is_err() {
            self.accounts = checkpoint;
        }
        self.clear_signers();
        result
    }
}

impl Ledger for MemoryLedger {
    fn load(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>> {
        Ok(self
            .accounts
            .get(address)
            .filter(|account| account.lamports > 0)
            .cloned())
    }

    fn is_signer(&self, key: &Pubkey) -> bool {
        self.signers.contains(key)
    }

    fn minimum_balance(&self, space: usize) -> Result<u64> {
        Ok(self.rent.minimum_balance(space))
    }

    fn create_account(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        lamports: u64,
        space: usize,
        owner: &Pubkey,
        signer_seeds: &[&[u8]],
    ) -> Result<()> {
        let signed_address = Pubkey::create_program_address(signer_seeds, owner)
            .map_err(|_| ProgramError::InvalidSeeds)?;
        if signed_address != *address || !self.signers.contains(payer) {
            return Err(ProgramError::MissingRequiredSignature.into());
        }

        let target = self
            .accounts
            .get(address)
            .cloned()
            .unwrap_or_else(|| AccountSnapshot::system(0));
        if !target.is_unallocated() {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }

        let payer_account = self
            .accounts
            .get(payer)
            .cloned()
            .unwrap_or_else(|| AccountSnapshot::system(0));
        let remaining = payer_account
            .lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
        // A payer may be drained to zero but not left rent-paying.
        if remaining != 0 && remaining < self.rent.minimum_balance(payer_account.data.len()) {
            return Err(ProgramError::InsufficientFunds.into());
        }

        self.accounts.insert(
            *payer,
            AccountSnapshot {
                lamports: remaining,
                ..payer_account
            },
        );
        self.accounts.insert(
            *address,
            AccountSnapshot {
                lamports: target.lamports + lamports,
                owner: *owner,
                data: vec![0; space],
            },
        );
        Ok(())
    }

    fn write(&mut self, address: &Pubkey, data: &[u8]) -> Result<()> {
        let account = self
            .accounts
            .get_mut(address)
            .ok_or(ProgramError::UninitializedAccount)?;
        if account.data.len() < data.len() {
            return Err(ProgramError::AccountDataTooSmall.into());
        }

        account.data[..data.len()].copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COUNTER_SEED;
    use crate::pda::find_counter_address;

    #[test]
    fn execute_rolls_back_on_error() {
        let mut ledger = MemoryLedger::new();
        let key = Pubkey::new_unique();
        ledger.airdrop(key, 10);

        let result: Result<()> = ledger.execute(|ledger| {
            ledger.airdrop(key, 5);
            Err(ProgramError::Custom(1).into())
        });

        assert!(result.is_err());
        assert_eq!(ledger.lamports(&key), 10);
    }

    #[test]
    fn execute_commits_and_clears_signers() {
        let mut ledger = MemoryLedger::new();
        let key = Pubkey::new_unique();
        ledger.sign(key);

        ledger
            .execute(|ledger| {
                ledger.airdrop(key, 5);
                Ok(())
            })
            .unwrap();

        assert_eq!(ledger.lamports(&key), 5);
        assert!(!ledger.is_signer(&key));
    }

    #[test]
    fn zero_lamport_accounts_are_absent() {
        let mut ledger = MemoryLedger::new();
        let key = Pubkey::new_unique();
        ledger.set_account(key, AccountSnapshot::system(0));

        assert_eq!(ledger.load(&key).unwrap(), None);
    }

    #[test]
    fn create_account_refuses_to_leave_payer_rent_paying() {
        let mut ledger = MemoryLedger::new();
        let payer = Pubkey::new_unique();
        let (address, bump) = find_counter_address(&payer, &crate::ID).unwrap();
        let seeds: &[&[u8]] = &[COUNTER_SEED, payer.as_ref(), &[bump]];
        ledger.airdrop(payer, 101);
        ledger.sign(payer);

        let result = ledger.create_account(&payer, &address, 100, 16, &crate::ID, seeds);
        assert_eq!(
            ProgramError::from(result.unwrap_err()),
            ProgramError::InsufficientFunds
        );
        assert!(ledger.account(&address).is_none());
        assert_eq!(ledger.lamports(&payer), 101);

        ledger
            .create_account(&payer, &address, 101, 16, &crate::ID, seeds)
            .unwrap();
        assert_eq!(ledger.lamports(&payer), 0);
        assert_eq!(ledger.lamports(&address), 101);
    }

    #[test]
    fn write_rejects_data_longer_than_account() {
        let mut ledger = MemoryLedger::new();
        let key = Pubkey::new_unique();
        ledger.set_account(
            key,
            AccountSnapshot {
                lamports: 1,
                owner: crate::ID,
                data: vec![0; 4],
            },
        );

        let result = ledger.write(&key, &[1; 5]);
        assert_eq!(
            ProgramError::from(result.unwrap_err()),
            ProgramError::AccountDataTooSmall
        );
        ledger.write(&key, &[1; 4]).unwrap();
        assert_eq!(ledger.account(&key).unwrap().data, vec![1; 4]);
    }

    #[test]
    fn create_account_requires_matching_pda_seeds() {
        let mut ledger = MemoryLedger::new();
        let payer = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        ledger.airdrop(payer, 1_000_000_000);
        ledger.sign(payer);

        let (address, bump) = find_counter_address(&payer, &crate::ID).unwrap();
        let (_, other_bump) = find_counter_address(&other, &crate::ID).unwrap();

        let forged = ledger.create_account(
            &payer,
            &address,
            1,
            16,
            &crate::ID,
            &[COUNTER_SEED, other.as_ref(), &[other_bump]],
        );
        assert!(forged.is_err());
        assert!(ledger.account(&address).is_none());

        ledger
            .create_account(
                &payer,
                &address,
                1,
                16,
                &crate::ID,
                &[COUNTER_SEED, payer.as_ref(), &[bump]],
            )
            .unwrap();
        let created = ledger.account(&address).unwrap();
        assert_eq!(created.owner, crate::ID);
        assert_eq!(created.data.len(), 16);
        assert_eq!(ledger.lamports(&payer), 999_999_999);
    }
}
