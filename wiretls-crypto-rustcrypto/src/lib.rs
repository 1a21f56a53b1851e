//! # RustCrypto-based Provider for wiretls
//!
//! This crate implements the `wiretls-crypto` provider interface on top of
//! the RustCrypto ecosystem (`hmac`, `sha1`, `sha2`) and the OS CSPRNG via
//! `rand`.
//!
//! ## Supported algorithms
//!
//! - **HMAC**: SHA-1, SHA-256, SHA-384
//! - **RNG**: OS entropy source
//!
//! The bulk cipher capability set mirrors what a deployment built on this
//! stack can actually service: NULL, AES-CBC, AES-GCM, 3DES-CBC and
//! ChaCha20-Poly1305. CCM and RC4 are disclaimed, so cipher suites naming
//! them fail with a configuration error at suite-selection time.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub mod hmac;
pub mod random;

use wiretls_crypto::{CipherAlgorithm, CryptoProvider, HashAlgorithm, Hmac, Random, Result};

use crate::random::OsRandom;

/// Crypto provider backed by the RustCrypto crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider {
    random: OsRandom,
}

impl RustCryptoProvider {
    /// Create a new provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CryptoProvider for RustCryptoProvider {
    fn hmac(&self, algorithm: HashAlgorithm, key: &[u8]) -> Result<Box<dyn Hmac>> {
        hmac::create_hmac(algorithm, key)
    }

    fn random(&self) -> &dyn Random {
        &self.random
    }

    fn supports_cipher(&self, algorithm: CipherAlgorithm) -> bool {
        !matches!(
            algorithm,
            CipherAlgorithm::Aes128Ccm | CipherAlgorithm::Rc4128
        )
    }
}
