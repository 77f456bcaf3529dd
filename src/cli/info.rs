use crate::pipeline::{
    modulus, BLOCK_SIZE, EXPANDED_KEY_LEN, FEISTEL_ROUNDS, PUBLIC_EXPONENT, ROUND_KEY_LEN,
    SBOX_SEED,
};

/// Describe the fixed pipeline parameters
pub fn show_info() -> String {
    let mut output = String::new();

    output.push_str("Mixdown Obfuscation Digest Pipeline\n");
    output.push_str("===================================\n\n");

    output.push_str("Stages:\n");
    output.push_str("  1. Hash data + key (sha256 default, sha3, blake3)\n");
    output.push_str("  2. Key expansion (cyclic repeat + running sum)\n");
    output.push_str("  3. Byte mixer (XOR, permute, S-box substitute)\n");
    output.push_str("  4. Modular exponentiation\n");
    output.push_str("  5. Feistel network\n");
    output.push_str("  6. AES-256-CBC (PKCS7, zero IV)\n");
    output.push_str("  7. Hash ciphertext\n");
    output.push_str("\n");

    output.push_str("Parameters:\n");
    output.push_str(&format!("  Expanded key length: {} bytes\n", EXPANDED_KEY_LEN));
    output.push_str(&format!("  S-box seed constant: {}\n", SBOX_SEED));
    output.push_str(&format!("  Permutation map: (i*7 + 3) mod n\n"));
    output.push_str(&format!("  Public exponent: {}\n", PUBLIC_EXPONENT));
    output.push_str(&format!("  Modulus: {} (2^128 - 159)\n", modulus()));
    output.push_str(&format!("  Feistel rounds: {}\n", FEISTEL_ROUNDS));
    output.push_str(&format!("  Round key length: {} bytes\n", ROUND_KEY_LEN));
    output.push_str(&format!("  Cipher block size: {} bytes\n", BLOCK_SIZE));
    output.push_str("\n");

    output.push_str("Properties:\n");
    output.push_str("  Deterministic: identical inputs give identical digests.\n");
    output.push_str("  Obfuscation only: no confidentiality or integrity claim.\n");
    output.push_str("  All state is per-call; nothing persists between runs.\n");

    output
}
