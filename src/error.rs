use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixdownError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Data must not be empty")]
    EmptyData,

    #[error("Invalid cipher key size: {0} bytes. AES-256 requires 32")]
    InvalidKeySize(usize),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, MixdownError>;
