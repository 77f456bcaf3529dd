//! Mixdown - Deterministic Obfuscation Digest Pipeline
//!
//! A byte-transformation pipeline that folds a plaintext and a key through
//! layers of decoy-cipher machinery and collapses the result into a single
//! 32-byte digest. None of the intermediate stages add cryptographic
//! strength - the construction is an obfuscation toy, not a vetted cipher -
//! but every stage is fully deterministic, so identical inputs always
//! produce the identical digest.
//!
//! ## Transform Pipeline
//!
//! ```text
//! data ‖ key → Hash → Expand → Xor → Permute → Substitute → ModExp → Feistel → AES-CBC → Hash → digest
//! ```
//!
//! - **Hash**: SHA-256 (default), SHA3-256, or BLAKE3 - always 32 bytes
//! - **Expand**: stretch the key to 32 bytes (cyclic repeat + running sum)
//! - **Xor**: XOR the intermediate hash with the expanded key
//! - **Permute**: relocate bytes to `(i*7+3) mod n`
//! - **Substitute**: fixed 256-entry S-box (UNKEYED, same box every call)
//! - **ModExp**: `modpow(value, 65537, 2^128 - 159)` over the mixed bytes
//! - **Feistel**: 16-round balanced network with an arithmetic key schedule
//! - **AES-CBC**: AES-256-CBC, PKCS7, zero IV, key = hash(expanded key)
//!
//! ## Example
//!
//! ```
//! use mixdown::encrypt;
//!
//! let digest = encrypt(b"Wh?", &[42, 17, 99]).unwrap();
//! let again = encrypt(b"Wh?", &[42, 17, 99]).unwrap();
//!
//! assert_eq!(digest.len(), 32);
//! assert_eq!(digest, again);
//! ```

pub mod cli;
pub mod error;
pub mod hash;
pub mod mixdown;
pub mod params;
pub mod pipeline;

pub use error::{MixdownError, Result};
pub use hash::{format_digest, hash_bytes};
pub use mixdown::{encrypt, encrypt_with};
pub use params::{HashAlgorithm, OutputFormat};
