use crate::error::{MixdownError, Result};

/// Hash algorithm options for the pipeline's digest primitive
/// Every variant produces 256-bit output, so the derived AES key is always
/// a valid AES-256 key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha3,
    Blake3,
}

impl std::str::FromStr for HashAlgorithm {
    type Err = MixdownError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha3" => Ok(Self::Sha3),
            "blake3" => Ok(Self::Blake3),
            _ => Err(MixdownError::UnsupportedAlgorithm(format!("hash: {}", s))),
        }
    }
}

/// Digest rendering options
/// `Hyphenated` matches the uppercase pair display of the original tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Hex,
    Hyphenated,
}

impl std::str::FromStr for OutputFormat {
    type Err = MixdownError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "hyphenated" => Ok(Self::Hyphenated),
            _ => Err(MixdownError::UnsupportedAlgorithm(format!("format: {}", s))),
        }
    }
}
