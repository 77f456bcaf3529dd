use crate::error::{MixdownError, Result};
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Encrypt with AES-256-CBC, PKCS7 padding and an all-zero IV
/// The IV is fixed on purpose: this stage must stay deterministic so the
/// whole pipeline is reproducible. Never reuse this construction for real
/// confidentiality.
pub fn aes_cbc_encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let iv = [0u8; BLOCK_SIZE];
    let encryptor = Aes256CbcEnc::new_from_slices(key, &iv)
        .map_err(|_| MixdownError::InvalidKeySize(key.len()))?;

    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
}
