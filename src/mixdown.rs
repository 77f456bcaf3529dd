use crate::error::{MixdownError, Result};
use crate::hash::hash_bytes;
use crate::params::HashAlgorithm;
use crate::pipeline::{
    aes_cbc_encrypt, expand_key, feistel_network, modexp_transform, permute_bytes,
    substitute_bytes, xor_bytes, EXPANDED_KEY_LEN,
};

/// Run the full obfuscation pipeline with the default hash algorithm
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<[u8; 32]> {
    encrypt_with(data, key, HashAlgorithm::default())
}

/// Run the full obfuscation pipeline
///
/// hash(data ‖ key) → expand key → XOR → permute → substitute → modular
/// exponentiation → Feistel → AES-256-CBC → hash(ciphertext). Every stage
/// is a pure function of its input, so identical `data`/`key`/`algorithm`
/// always produce the identical digest. Any stage error aborts the call;
/// there is no state to roll back.
pub fn encrypt_with(data: &[u8], key: &[u8], algorithm: HashAlgorithm) -> Result<[u8; 32]> {
    if data.is_empty() {
        return Err(MixdownError::EmptyData);
    }
    if key.is_empty() {
        return Err(MixdownError::EmptyKey);
    }

    let mut combined = Vec::with_capacity(data.len() + key.len());
    combined.extend_from_slice(data);
    combined.extend_from_slice(key);
    let intermediate = hash_bytes(&combined, algorithm);
    log::debug!("hashed {} combined bytes with {:?}", combined.len(), algorithm);

    let expanded = expand_key(key, EXPANDED_KEY_LEN)?;

    let mixed = substitute_bytes(&permute_bytes(&xor_bytes(&intermediate, &expanded)));
    log::debug!("mixer stages produced {} bytes", mixed.len());

    let reduced = modexp_transform(&mixed);
    log::debug!("modular exponentiation reduced to {} bytes", reduced.len());

    let feistel_out = feistel_network(&reduced);
    log::debug!("feistel network produced {} bytes", feistel_out.len());

    let aes_key = hash_bytes(&expanded, algorithm);
    let ciphertext = aes_cbc_encrypt(&feistel_out, &aes_key)?;
    log::debug!("block cipher produced {} bytes", ciphertext.len());

    Ok(hash_bytes(&ciphertext, algorithm))
}
