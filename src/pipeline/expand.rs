use crate::error::{MixdownError, Result};

/// Expanded key length used by the pipeline driver
pub const EXPANDED_KEY_LEN: usize = 32;

/// Stretch a key to exactly `length` bytes
/// The key is repeated cyclically, then smoothed with a running modular sum
/// so every output byte depends on all bytes before it
/// Empty keys are rejected - there is nothing to repeat
pub fn expand_key(key: &[u8], length: usize) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(MixdownError::EmptyKey);
    }

    let mut expanded: Vec<u8> = (0..length).map(|i| key[i % key.len()]).collect();

    for i in 1..length {
        expanded[i] = expanded[i].wrapping_add(expanded[i - 1]);
    }

    Ok(expanded)
}
