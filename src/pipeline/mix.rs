/// Accumulator constant feeding the S-box shuffle
/// Fixed by construction: the box must come out identical on every call
pub const SBOX_SEED: u8 = 42;

/// XOR data with a cyclically repeated key
/// `key` must be non-empty
pub fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect()
}

/// Relocate each byte to position `(i*7 + 3) mod n`
/// Only a true permutation when gcd(7, n) == 1. For lengths divisible by 7
/// the target indices collide and earlier bytes are overwritten - that lossy
/// behavior is preserved as-is, so callers that need a bijective step must
/// keep the length coprime with 7. The pipeline driver always feeds 32
/// bytes through here.
pub fn permute_bytes(data: &[u8]) -> Vec<u8> {
    let n = data.len();
    let mut result = vec![0u8; n];
    if n == 0 {
        return result;
    }

    for (i, &b) in data.iter().enumerate() {
        result[(i * 7 + 3) % n] = b;
    }

    result
}

/// Generate the fixed 256-entry substitution box
/// Identity table shuffled by a running accumulator: j absorbs the current
/// entry plus the seed constant, then the entries at i and j swap. UNKEYED -
/// the same box comes out on every invocation, which keeps the pipeline
/// deterministic.
pub fn generate_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    for (i, slot) in sbox.iter_mut().enumerate() {
        *slot = i as u8;
    }

    let mut j = 0u8;
    for i in 0..256 {
        j = j.wrapping_add(sbox[i]).wrapping_add(SBOX_SEED);
        sbox.swap(i, j as usize);
    }

    debug_assert!(is_permutation(&sbox), "S-box generation must stay bijective");
    sbox
}

/// Map every byte through the fixed S-box
pub fn substitute_bytes(data: &[u8]) -> Vec<u8> {
    let sbox = generate_sbox();
    data.iter().map(|&b| sbox[b as usize]).collect()
}

/// Check that a 256-entry table hits each byte value exactly once
pub fn is_permutation(sbox: &[u8; 256]) -> bool {
    let mut seen = [false; 256];
    for &b in sbox.iter() {
        seen[b as usize] = true;
    }
    seen.iter().all(|&hit| hit)
}
