use crate::params::{HashAlgorithm, OutputFormat};
use digest::Digest;
use sha2::Sha256;
use sha3::Sha3_256;

/// Hash a message with the selected algorithm
/// Every algorithm returns a 32-byte digest
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> [u8; 32] {
    match algorithm {
        HashAlgorithm::Sha256 => Sha256::digest(data).into(),
        HashAlgorithm::Sha3 => Sha3_256::digest(data).into(),
        HashAlgorithm::Blake3 => *blake3::hash(data).as_bytes(),
    }
}

/// Render a digest for display
pub fn format_digest(digest: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => hex::encode(digest),
        OutputFormat::Hyphenated => digest
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join("-"),
    }
}
