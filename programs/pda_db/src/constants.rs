/// Namespace seed for counter PDAs, followed by the signer's public key.
pub const COUNTER_SEED: &[u8] = b"count_data";

/// Length of the Anchor account discriminator that prefixes account data.
pub const DISCRIMINATOR_LEN: usize = 8;
