//! Error types for the cryptographic provider.

use std::fmt;

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested algorithm is not supported by this provider.
    UnsupportedAlgorithm(String),

    /// Invalid key length for the algorithm.
    InvalidKeyLength,

    /// Random number generation failed.
    RandomFailed(String),

    /// Internal provider error.
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedAlgorithm(name) => write!(f, "unsupported algorithm: {}", name),
            Error::InvalidKeyLength => write!(f, "invalid key length"),
            Error::RandomFailed(msg) => write!(f, "random generation failed: {}", msg),
            Error::Internal(msg) => write!(f, "internal provider error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
