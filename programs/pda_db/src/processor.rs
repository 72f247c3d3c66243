//! # Processor
//!
//! State transitions of the counter, independent of how accounts reach the
//! program. Both handlers re-derive the counter address from the signer on
//! every call and validate everything before the single write, so a failure
//! never leaves a partially updated account.

use anchor_lang::prelude::*;

use crate::errors::CounterError;
use crate::ledger::Ledger;
use crate::pda::counter_seeds;
use crate::state::Counter;

/// Derive the signer's counter PDA through the ledger and check `counter` is it.
/// Returns the bump.
fn authorize<L: Ledger + ?Sized>(
    ledger: &L,
    program_id: &Pubkey,
    signer: &Pubkey,
    counter: &Pubkey,
) -> Result<u8> {
    require!(ledger.is_signer(signer), CounterError::MissingSignature);

    let (expected, bump) = ledger
        .find_program_address(&counter_seeds(signer), program_id)
        .ok_or(CounterError::DerivationExhausted)?;
    require_keys_eq!(*counter, expected, CounterError::AddressMismatch);

    Ok(bump)
}

/// Create the counter PDA of `signer`, paid by `signer`, holding `count`.
pub fn initialize_counter<L: Ledger + ?Sized>(
    ledger: &mut L,
    program_id: &Pubkey,
    signer: &Pubkey,
    counter: &Pubkey,
    count: u64,
) -> Result<Counter> {
    let bump = authorize(ledger, program_id, signer, counter)?;

    // Lamports sent to the PDA before it was allocated count towards rent.
    let prefunded = match ledger.load(counter)? {
        Some(existing) => {
            require!(existing.is_unallocated(), CounterError::AlreadyInitialized);
            existing.lamports
        }
        None => 0,
    };

    let rent = ledger.minimum_balance(Counter::LEN)?;
    let shortfall = rent.saturating_sub(prefunded);
    let (balance, signer_space) = ledger
        .load(signer)?
        .map_or((0, 0), |account| (account.lamports, account.data.len()));
    require_gte!(balance, shortfall, CounterError::InsufficientFunds);
    // The runtime rejects a payer left with a non-zero balance below its own
    // rent-exempt minimum.
    let remaining = balance - shortfall;
    require!(
        remaining == 0 || remaining >= ledger.minimum_balance(signer_space)?,
        CounterError::InsufficientFunds
    );

    let [seed, signer_key] = counter_seeds(signer);
    let bump_seed = [bump];
    ledger.create_account(
        signer,
        counter,
        shortfall,
        Counter::LEN,
        program_id,
        &[seed, signer_key, &bump_seed],
    )?;

    let state = Counter::new(count);
    ledger.write(counter, &state.to_bytes())?;
    Ok(state)
}

/// Add one to the counter PDA of `signer`. Returns the previous count and the
/// updated state.
pub fn increment_counter<L: Ledger + ?Sized>(
    ledger: &mut L,
    program_id: &Pubkey,
    signer: &Pubkey,
    counter: &Pubkey,
) -> Result<(u64, Counter)> {
    authorize(ledger, program_id, signer, counter)?;

    let account = ledger
        .load(counter)?
        .ok_or(CounterError::NotInitialized)?;
    require_keys_eq!(account.owner, *program_id, CounterError::NotInitialized);

    let mut state = Counter::unpack(&account.data)?;
    let previous = state.count;
    state.increment()?;

    ledger.write(counter, &state.to_bytes())?;
    Ok((previous, state))
}
