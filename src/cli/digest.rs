use crate::error::Result;
use crate::hash::format_digest;
use crate::mixdown::encrypt_with;
use crate::params::{HashAlgorithm, OutputFormat};
use std::path::Path;

/// Options for the digest command
#[derive(Debug, Clone, Default)]
pub struct DigestOptions {
    pub key: String,
    pub hash: HashAlgorithm,
    pub format: OutputFormat,
}

/// Digest raw bytes and render the result for display
pub fn digest_bytes(data: &[u8], options: &DigestOptions) -> Result<String> {
    let digest = encrypt_with(data, options.key.as_bytes(), options.hash)?;
    Ok(format_digest(&digest, options.format))
}

/// Digest a file's contents and render the result for display
pub fn digest_file(path: &Path, options: &DigestOptions) -> Result<String> {
    let data = std::fs::read(path)?;
    digest_bytes(&data, options)
}
