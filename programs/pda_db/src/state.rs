//! # State Module
//!
//! The Counter account and its on-chain byte layout. The layout is shared with
//! off-chain decoders, so it is written out explicitly instead of relying on the
//! in-memory representation:
//!
//! | offset | size | field                   |
//! |--------|------|-------------------------|
//! | 0      | 8    | Anchor discriminator    |
//! | 8      | 8    | `count`, little-endian  |

use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_LEN;
use crate::errors::CounterError;

/// Per-signer counter stored at the signer's PDA
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Counter {
    /// The current count value
    pub count: u64,
}

impl Counter {
    /// Total account size, discriminator included
    pub const LEN: usize = DISCRIMINATOR_LEN + Counter::INIT_SPACE;

    pub fn new(count: u64) -> Self {
        Self { count }
    }

    /// Serialize into the fixed on-chain layout
    pub fn to_bytes(&self) -> [u8; Counter::LEN] {
        let mut bytes = [0u8; Counter::LEN];
        bytes[..DISCRIMINATOR_LEN].copy_from_slice(Self::DISCRIMINATOR);
        bytes[DISCRIMINATOR_LEN..].copy_from_slice(&self.count.to_le_bytes());
        bytes
    }

    /// Parse account data, rejecting anything that is not a Counter.
    ///
    /// Trailing bytes past `LEN` are ignored, matching Anchor's decoder.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        require!(data.len() >= Self::LEN, CounterError::NotInitialized);
        require!(
            &data[..DISCRIMINATOR_LEN] == Self::DISCRIMINATOR,
            CounterError::NotInitialized
        );

        let count = <[u8; 8]>::try_from(&data[DISCRIMINATOR_LEN..Self::LEN])
            .map_err(|_| error!(CounterError::NotInitialized))?;
        Ok(Self {
            count: u64::from_le_bytes(count),
        })
    }

    /// Increment the counter value, failing instead of wrapping
    pub fn increment(&mut self) -> Result<u64> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(CounterError::CounterOverflow)?;
        Ok(self.count)
    }
}
