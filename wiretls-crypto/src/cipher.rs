//! Bulk cipher algorithm identifiers.
//!
//! These name the transformations a provider may or may not be able to
//! service. The structural metadata for each cipher (key, IV and tag
//! lengths, cipher category) lives in the `wiretls-core` cipher catalog;
//! this enum exists so capability queries can cross the provider boundary
//! without dragging the catalog along.

/// Bulk cipher algorithms named by TLS 1.2 cipher suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    /// No encryption (TLS_NULL_WITH_NULL_NULL and pre-cipher state)
    Null,
    /// AES-128 in GCM mode
    Aes128Gcm,
    /// AES-256 in GCM mode
    Aes256Gcm,
    /// AES-128 in CBC mode
    Aes128Cbc,
    /// AES-256 in CBC mode
    Aes256Cbc,
    /// Triple-DES EDE in CBC mode
    TripleDesEdeCbc,
    /// ChaCha20-Poly1305 (RFC 7905)
    ChaCha20Poly1305,
    /// AES-128 in CCM mode
    Aes128Ccm,
    /// RC4 with 128-bit key (legacy stream cipher)
    Rc4128,
}

impl CipherAlgorithm {
    /// Get the name of this algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            CipherAlgorithm::Null => "NULL",
            CipherAlgorithm::Aes128Gcm => "AES-128-GCM",
            CipherAlgorithm::Aes256Gcm => "AES-256-GCM",
            CipherAlgorithm::Aes128Cbc => "AES-128-CBC",
            CipherAlgorithm::Aes256Cbc => "AES-256-CBC",
            CipherAlgorithm::TripleDesEdeCbc => "3DES-EDE-CBC",
            CipherAlgorithm::ChaCha20Poly1305 => "CHACHA20-POLY1305",
            CipherAlgorithm::Aes128Ccm => "AES-128-CCM",
            CipherAlgorithm::Rc4128 => "RC4-128",
        }
    }
}
