//! On-chain ledger backed by the instruction's accounts

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use super::{AccountSnapshot, Ledger};

/// [`Ledger`] over the `AccountInfo`s passed to the current instruction.
///
/// Only the listed accounts are visible; anything else fails with
/// `NotEnoughAccountKeys`. Account creation goes through System Program CPIs,
/// so it needs the System Program account.
pub struct AccountInfoLedger<'a, 'info> {
    accounts: &'a [AccountInfo<'info>],
    system_program: Option<&'a AccountInfo<'info>>,
}

impl<'a, 'info> AccountInfoLedger<'a, 'info> {
    pub fn new(accounts: &'a [AccountInfo<'info>]) -> Self {
        Self {
            accounts,
            system_program: None,
        }
    }

    pub fn with_system_program(mut self, system_program: &'a AccountInfo<'info>) -> Self {
        self.system_program = Some(system_program);
        self
    }

    fn account(&self, address: &Pubkey) -> Result<&'a AccountInfo<'info>> {
        self.accounts
            .iter()
            .find(|info| info.key == address)
            .ok_or_else(|| ProgramError::NotEnoughAccountKeys.into())
    }

    fn system_program(&self) -> Result<AccountInfo<'info>> {
        self.system_program
            .cloned()
            .ok_or_else(|| error!(ErrorCode::AccountNotEnoughKeys))
    }
}

impl Ledger for AccountInfoLedger<'_, '_> {
    fn load(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>> {
        let info = self.account(address)?;
        if info.lamports() == 0 {
            return Ok(None);
        }

        let data = info.try_borrow_data()?.to_vec();
        Ok(Some(AccountSnapshot {
            lamports: info.lamports(),
            owner: *info.owner,
            data,
        }))
    }

    fn is_signer(&self, key: &Pubkey) -> bool {
        self.account(key).map(|info| info.is_signer).unwrap_or(false)
    }

    fn minimum_balance(&self, space: usize) -> Result<u64> {
        Ok(Rent::get()?.minimum_balance(space))
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
        let payer = self.account(payer)?.clone();
        let target = self.account(address)?.clone();
        let system = self.system_program()?;
        let signer_seeds = &[signer_seeds];

        // create_account refuses targets that already hold lamports, so a
        // pre-funded PDA is topped up, allocated and assigned in separate steps.
        if target.lamports() == 0 {
            return system_program::create_account(
                CpiContext::new_with_signer(
                    system,
                    CreateAccount {
                        from: payer,
                        to: target,
                    },
                    signer_seeds,
                ),
                lamports,
                space as u64,
                owner,
            );
        }

        if lamports > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.clone(),
                    Transfer {
                        from: payer,
                        to: target.clone(),
                    },
                ),
                lamports,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system.clone(),
                Allocate {
                    account_to_allocate: target.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system,
                Assign {
                    account_to_assign: target,
                },
                signer_seeds,
            ),
            owner,
        )
    }

    fn write(&mut self, address: &Pubkey, data: &[u8]) -> Result<()> {
        let info = self.account(address)?;
        let mut dst = info.try_borrow_mut_data()?;
        require_gte!(dst.len(), data.len(), ErrorCode::AccountDidNotSerialize);

        dst[..data.len()].copy_from_slice(data);
        Ok(())
    }
}
