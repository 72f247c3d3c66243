//! Increment instruction for the PDA counter program

use anchor_lang::prelude::*;

use crate::errors::CounterError;
use crate::events::CounterIncremented;
use crate::ledger::AccountInfoLedger;
use crate::processor;

/// Increment the signer's counter by 1
///
/// Only the signer whose key the counter address was derived from can reach
/// it: the processor re-derives the address and rejects any other account.
///
/// # Events
/// * `CounterIncremented` - Emitted with the before/after values
pub fn increment(ctx: Context<Increment>) -> Result<()> {
    let signer = ctx.accounts.signer.to_account_info();
    let counter = ctx.accounts.counter.to_account_info();
    let (signer_key, counter_key) = (signer.key(), counter.key());

    let accounts = [signer, counter];
    let mut ledger = AccountInfoLedger::new(&accounts);
    let (previous_count, state) =
        processor::increment_counter(&mut ledger, ctx.program_id, &signer_key, &counter_key)?;

    let clock = Clock::get()?;
    emit!(CounterIncremented {
        counter: counter_key,
        signer: signer_key,
        previous_count,
        count: state.count,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter {} incremented from {} to {}",
        counter_key,
        previous_count,
        state.count
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Increment<'info> {
    /// The signer the counter address is derived from
    /// CHECK: the constraint requires a signature
    #[account(mut, signer @ CounterError::MissingSignature)]
    pub signer: UncheckedAccount<'info>,

    /// The signer's counter PDA
    /// CHECK: address, owner and layout are validated by the processor
    #[account(mut)]
    pub counter: UncheckedAccount<'info>,
}
