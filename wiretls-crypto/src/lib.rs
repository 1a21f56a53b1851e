//! # wiretls Cryptographic Provider Interface
//!
//! This crate defines the cryptographic abstraction layer for wiretls.
//! The codec in `wiretls-core` never touches a concrete crypto library.
//! HMAC for the TLS 1.2 PRF, a CSPRNG for explicit per-record IVs, and
//! the cipher capability query all go through the traits defined here.
//!
//! ## Architecture
//!
//! ```text
//! CryptoProvider (main trait)
//! ├── Hmac   (HMAC with SHA-1, SHA-256, SHA-384)
//! ├── Random (CSPRNG)
//! └── supports_cipher (bulk cipher capability query)
//! ```
//!
//! A provider that cannot service a bulk cipher (e.g. a backend without
//! CCM support) reports that through `supports_cipher`, so callers can
//! reject the cipher suite with a configuration error up front instead
//! of failing deep inside a record operation.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub mod cipher;
pub mod error;
pub mod hash;
pub mod hmac;
pub mod random;

pub use cipher::CipherAlgorithm;
pub use error::{Error, Result};
pub use hash::HashAlgorithm;
pub use hmac::Hmac;
pub use random::Random;

/// The main cryptographic provider trait.
///
/// Implementations supply the primitives the wiretls codec depends on.
/// All implementations must be `Send + Sync` so a provider can be shared
/// across connections (each connection still drives its own operations
/// from a single thread).
pub trait CryptoProvider: Send + Sync {
    /// Get an HMAC instance keyed with `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash algorithm is not supported.
    fn hmac(&self, algorithm: HashAlgorithm, key: &[u8]) -> Result<Box<dyn Hmac>>;

    /// Get the cryptographically secure random number generator.
    fn random(&self) -> &dyn Random;

    /// Check whether this provider can service a bulk cipher.
    ///
    /// This is a pure capability query; it must not allocate cipher state.
    fn supports_cipher(&self, algorithm: CipherAlgorithm) -> bool;
}
