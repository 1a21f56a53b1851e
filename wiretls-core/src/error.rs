//! Error types for the wiretls codec.
//!
//! The taxonomy separates framing errors (truncation, record overflow),
//! type errors (unknown handshake type, wrong-variant downcast),
//! derivation errors (short key block) and capability errors (cipher not
//! serviceable by the active provider). Callers translate these into
//! protocol alerts or connection aborts; the codec itself never retries
//! or silently truncates.

use core::fmt;

/// Result type for wiretls operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding TLS 1.2 protocol data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A record header declared a payload longer than 2^14 bytes.
    ///
    /// Maps to the RECORD_OVERFLOW alert.
    RecordOverflow {
        /// Declared payload length
        length: usize,
    },

    /// Input ended before a declared length was satisfied.
    Truncated {
        /// What was being read
        context: &'static str,
        /// Bytes required
        needed: usize,
        /// Bytes available
        available: usize,
    },

    /// Malformed field (unknown content type, bad alert code, ...).
    ///
    /// Maps to the DECODE_ERROR alert.
    DecodeError(String),

    /// Handshake type byte with no registered decoder.
    UnknownHandshakeType(u8),

    /// A message arrived where the protocol does not allow it.
    UnexpectedMessage(String),

    /// A handshake body was requested as the wrong concrete type.
    TypeMismatch {
        /// The variant the caller asked for
        expected: &'static str,
        /// The variant actually present
        actual: &'static str,
    },

    /// Key block too short for the negotiated cipher suite.
    InsufficientKeyBlock {
        /// Bytes the cipher suite requires
        required: usize,
        /// Bytes available in the key block
        available: usize,
    },

    /// Cipher suite names a transformation the active provider disclaims.
    ///
    /// Distinct from [`Error::CryptoError`] so callers can fall back to a
    /// different suite instead of treating it as a runtime failure.
    UnsupportedCipher(String),

    /// Runtime failure inside the crypto provider.
    CryptoError(String),

    /// I/O failure on the underlying byte stream.
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RecordOverflow { length } => {
                write!(f, "record overflow: declared length {} exceeds 16384", length)
            }
            Error::Truncated {
                context,
                needed,
                available,
            } => write!(
                f,
                "truncated {}: need {} bytes, have {}",
                context, needed, available
            ),
            Error::DecodeError(msg) => write!(f, "decode error: {}", msg),
            Error::UnknownHandshakeType(t) => write!(f, "unknown handshake type: {}", t),
            Error::UnexpectedMessage(msg) => write!(f, "unexpected message: {}", msg),
            Error::TypeMismatch { expected, actual } => {
                write!(f, "handshake body is {}, not {}", actual, expected)
            }
            Error::InsufficientKeyBlock {
                required,
                available,
            } => write!(
                f,
                "key block too short: cipher suite requires {} bytes, got {}",
                required, available
            ),
            Error::UnsupportedCipher(msg) => write!(f, "unsupported cipher: {}", msg),
            Error::CryptoError(msg) => write!(f, "cryptographic error: {}", msg),
            Error::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<wiretls_crypto::Error> for Error {
    fn from(e: wiretls_crypto::Error) -> Self {
        Error::CryptoError(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}
