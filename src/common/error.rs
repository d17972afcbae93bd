use thiserror::Error;

use crate::common::container::ContainerError;

/// Failure categories for key generation, container handling, and
/// encryption. Nothing is retried internally; every error propagates to the
/// binary entry point, which reports it and exits non-zero.
#[derive(Debug, Error)]
pub enum EncryptorError {
    #[error("key generation failed: {0}")]
    Generation(rsa::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode key: {0}")]
    Encoding(rsa::pkcs1::Error),

    #[error("failed to decode container: {0}")]
    Decoding(#[from] ContainerError),

    #[error("failed to parse public key: {0}")]
    Parse(rsa::pkcs1::Error),

    #[error("encryption failed: {0}")]
    Encryption(rsa::Error),
}

pub type Result<T> = std::result::Result<T, EncryptorError>;
