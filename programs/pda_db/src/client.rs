//! Off-chain helpers for building counter instructions and reading counters

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

use crate::pda::find_counter_address;
use crate::state::Counter;

/// Address of `signer`'s counter under this program
pub fn counter_address(signer: &Pubkey) -> Result<Pubkey> {
    find_counter_address(signer, &crate::ID).map(|(address, _)| address)
}

/// `initialize` instruction creating `signer`'s counter with `count`
pub fn initialize_instruction(signer: &Pubkey, count: u64) -> Result<Instruction> {
    let accounts = crate::accounts::Initialize {
        signer: *signer,
        counter: counter_address(signer)?,
        system_program: anchor_lang::system_program::ID,
    };

    Ok(Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::Initialize { count }.data(),
    })
}

/// `increment` instruction for `signer`'s counter
pub fn increment_instruction(signer: &Pubkey) -> Result<Instruction> {
    let accounts = crate::accounts::Increment {
        signer: *signer,
        counter: counter_address(signer)?,
    };

    Ok(Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::Increment {}.data(),
    })
}

/// Decode counter account data with Anchor's account decoder
pub fn decode_counter(mut data: &[u8]) -> Result<Counter> {
    Counter::try_deserialize(&mut data)
}
