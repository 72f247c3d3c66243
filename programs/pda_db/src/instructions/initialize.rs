//! Initialize instruction for the PDA counter program

use anchor_lang::prelude::*;

use crate::errors::CounterError;
use crate::events::CounterInitialized;
use crate::ledger::AccountInfoLedger;
use crate::processor;

/// Create the signer's counter PDA holding `count`
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `count` - Initial counter value
///
/// # Events
/// * `CounterInitialized` - Emitted once the account is written
pub fn initialize(ctx: Context<Initialize>, count: u64) -> Result<()> {
    let signer = ctx.accounts.signer.to_account_info();
    let counter = ctx.accounts.counter.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let (signer_key, counter_key) = (signer.key(), counter.key());

    let accounts = [signer, counter];
    let mut ledger = AccountInfoLedger::new(&accounts).with_system_program(&system_program);
    let state = processor::initialize_counter(
        &mut ledger,
        ctx.program_id,
        &signer_key,
        &counter_key,
        count,
    )?;

    let clock = Clock::get()?;
    emit!(CounterInitialized {
        counter: counter_key,
        signer: signer_key,
        count: state.count,
        timestamp: clock.unix_timestamp,
    });

    msg!("Greetings from: {:?}", ctx.program_id);
    msg!("Counter {} initialized to {} for {}", counter_key, state.count, signer_key);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The signer the counter address is derived from; pays for the account
    /// CHECK: the constraint requires a signature
    #[account(mut, signer @ CounterError::MissingSignature)]
    pub signer: UncheckedAccount<'info>,

    /// The counter PDA, created by this instruction
    /// CHECK: address and prior state are validated by the processor
    #[account(mut)]
    pub counter: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
