/// Number of Feistel rounds
pub const FEISTEL_ROUNDS: usize = 16;

/// Round key length in bytes
pub const ROUND_KEY_LEN: usize = 8;

/// Derive the 8-byte key for a round
/// Arithmetic schedule: byte i of round r is (i+1)*(r+1) mod 256
pub fn round_key(round: usize) -> [u8; ROUND_KEY_LEN] {
    let mut key = [0u8; ROUND_KEY_LEN];
    for (i, slot) in key.iter_mut().enumerate() {
        *slot = (((i + 1) * (round + 1)) % 256) as u8;
    }
    key
}

/// Round function: nibble-expand, XOR with the round key, recompress
/// Each byte splits into a high-nibble byte and a low-nibble byte, the
/// doubled buffer is XORed cyclically with the round key, and adjacent
/// pairs recombine as (high nibble of first) | (low nibble of second)
fn round_function(half: &[u8], key: &[u8; ROUND_KEY_LEN]) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(half.len() * 2);
    for &b in half {
        expanded.push(b & 0xF0);
        expanded.push(b & 0x0F);
    }

    for (i, byte) in expanded.iter_mut().enumerate() {
        *byte ^= key[i % ROUND_KEY_LEN];
    }

    (0..half.len())
        .map(|i| (expanded[2 * i] & 0xF0) | (expanded[2 * i + 1] & 0x0F))
        .collect()
}

/// Run the 16-round balanced Feistel network
/// Odd-length input is zero-padded by one byte before the midpoint split,
/// so the output tracks the padded length. Forward-only: no decrypt path
/// exists in this pipeline.
pub fn feistel_network(data: &[u8]) -> Vec<u8> {
    let mut padded = data.to_vec();
    if padded.len() % 2 != 0 {
        padded.push(0);
    }

    let half = padded.len() / 2;
    let mut left = padded[..half].to_vec();
    let mut right = padded[half..].to_vec();

    for round in 0..FEISTEL_ROUNDS {
        let key = round_key(round);
        let f = round_function(&right, &key);

        let new_right: Vec<u8> = left
            .iter()
            .enumerate()
            .map(|(i, &b)| b ^ f[i % f.len()])
            .collect();

        left = std::mem::replace(&mut right, new_right);
    }

    let mut result = left;
    result.extend_from_slice(&right);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_key_schedule_first_round() {
        assert_eq!(round_key(0), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_round_key_schedule_last_round() {
        assert_eq!(round_key(15), [16, 32, 48, 64, 80, 96, 112, 128]);
    }

    #[test]
    fn test_round_keys_differ_across_rounds() {
        assert_ne!(round_key(0), round_key(1));
        assert_ne!(round_key(7), round_key(8));
    }

    #[test]
    fn test_network_is_deterministic() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04];
        assert_eq!(feistel_network(&data), feistel_network(&data));
    }

    #[test]
    fn test_network_changes_data() {
        let data = [1, 2, 3, 4, 5, 6];
        assert_ne!(feistel_network(&data), data.to_vec());
    }

    #[test]
    fn test_even_length_preserved() {
        let out = feistel_network(&[0u8; 10]);
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn test_odd_length_grows_by_one() {
        let out = feistel_network(&[7, 7, 7, 7, 7]);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(feistel_network(&[]).is_empty());
    }

    #[test]
    fn test_single_byte_input() {
        // Pads to two bytes, splits into one-byte halves
        let out = feistel_network(&[0x5A]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_halves_interact() {
        // Changing one byte of the right half must ripple into the left
        // half within two rounds
        let base = feistel_network(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let tweaked = feistel_network(&[1, 2, 3, 4, 5, 6, 7, 9]);
        assert_ne!(base[..4], tweaked[..4]);
    }
}
