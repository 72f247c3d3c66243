//! Counter address derivation
//!
//! Clients and the program derive the same address from the same seeds, so a
//! counter can always be located without a registry.

use anchor_lang::prelude::*;

use crate::constants::COUNTER_SEED;
use crate::errors::CounterError;

/// Seeds of the counter PDA owned by `signer`, without the bump.
pub fn counter_seeds(signer: &Pubkey) -> [&[u8]; 2] {
    [COUNTER_SEED, signer.as_ref()]
}

/// Find the counter PDA and bump for `signer` under `program_id`.
///
/// The bump is searched from 255 downward; the first off-curve address wins.
pub fn find_counter_address(signer: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&counter_seeds(signer), program_id)
        .ok_or_else(|| error!(CounterError::DerivationExhausted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let signer = Pubkey::new_unique();

        let first = find_counter_address(&signer, &crate::ID).unwrap();
        let second = find_counter_address(&signer, &crate::ID).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn distinct_signers_get_distinct_addresses() {
        let addresses: std::collections::HashSet<Pubkey> = (0..64)
            .map(|_| find_counter_address(&Pubkey::new_unique(), &crate::ID).unwrap().0)
            .collect();

        assert_eq!(addresses.len(), 64);
    }

    #[test]
    fn derived_address_is_off_curve_and_matches_bump() {
        let signer = Pubkey::new_unique();
        let (address, bump) = find_counter_address(&signer, &crate::ID).unwrap();

        assert!(!address.is_on_curve());
        let recreated =
            Pubkey::create_program_address(&[COUNTER_SEED, signer.as_ref(), &[bump]], &crate::ID)
                .unwrap();
        assert_eq!(recreated, address);
    }

    #[test]
    fn program_id_is_part_of_the_derivation() {
        let signer = Pubkey::new_unique();

        let ours = find_counter_address(&signer, &crate::ID).unwrap().0;
        let theirs = find_counter_address(&signer, &Pubkey::new_unique()).unwrap().0;

        assert_ne!(ours, theirs);
    }
}
