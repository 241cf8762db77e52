// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Unsafe log filename: {0}")]
    UnsafePath(String),
    #[error("Decryption failed: token was tampered with or the key does not match")]
    Decryption,
    #[error("Encryption failed")]
    Encryption,
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
