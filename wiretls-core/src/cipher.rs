//! Cipher suite and bulk cipher catalog.
//!
//! Pure metadata, no I/O and no cipher state. Each bulk cipher carries the
//! structural facts the record layer and key derivation need (key, IV and
//! tag lengths, cipher category); each cipher suite maps its u16 code to a
//! key exchange, a bulk cipher and a digest. Everything is plain immutable
//! data keyed by closed enums.

use wiretls_crypto::{CipherAlgorithm, CryptoProvider, HashAlgorithm, Random};

use crate::error::{Error, Result};

/// Category of a bulk cipher, which dictates the key block layout and the
/// nonce/ciphertext split of encrypted payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Authenticated encryption with associated data (GCM, CCM, ChaCha20-Poly1305)
    Aead,
    /// Block cipher in CBC mode with HMAC
    Block,
    /// Stream cipher with HMAC
    Stream,
    /// No encryption
    NoEncryption,
}

/// Structural metadata for a bulk cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkCipherInfo {
    /// Algorithm identifier the crypto provider understands
    pub algorithm: CipherAlgorithm,
    /// Write key length in bytes
    pub key_len: usize,
    /// Cipher block size in bytes (0 for stream/AEAD-without-blocks)
    pub block_size: usize,
    /// Fixed (implicit) IV length carved from the key block
    pub fixed_iv_len: usize,
    /// Explicit per-record nonce length carried on the wire
    pub explicit_nonce_len: usize,
    /// Cipher category
    pub kind: CipherKind,
    /// MAC key length; `None` means "use the negotiated digest's length"
    pub mac_key_len: Option<usize>,
    /// AEAD authentication tag length (0 for non-AEAD)
    pub tag_len: usize,
}

/// Bulk ciphers named by the cipher suite catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkCipher {
    /// No encryption
    Null,
    /// AES-128-GCM
    Aes128Gcm,
    /// AES-256-GCM
    Aes256Gcm,
    /// AES-128-CBC
    Aes128Cbc,
    /// AES-256-CBC
    Aes256Cbc,
    /// 3DES-EDE-CBC
    TripleDesEdeCbc,
    /// ChaCha20-Poly1305 (RFC 7905: 12-byte fixed IV, no explicit nonce)
    ChaCha20Poly1305,
    /// AES-128-CCM
    Aes128Ccm,
    /// RC4-128 (legacy stream cipher)
    Rc4128,
}

impl BulkCipher {
    /// Structural metadata for this cipher.
    pub const fn info(self) -> BulkCipherInfo {
        match self {
            BulkCipher::Null => BulkCipherInfo {
                algorithm: CipherAlgorithm::Null,
                key_len: 0,
                block_size: 0,
                fixed_iv_len: 0,
                explicit_nonce_len: 0,
                kind: CipherKind::NoEncryption,
                mac_key_len: Some(0),
                tag_len: 0,
            },
            BulkCipher::Aes128Gcm => BulkCipherInfo {
                algorithm: CipherAlgorithm::Aes128Gcm,
                key_len: 16,
                block_size: 16,
                fixed_iv_len: 4,
                explicit_nonce_len: 8,
                kind: CipherKind::Aead,
                mac_key_len: Some(0),
                tag_len: 16,
            },
            BulkCipher::Aes256Gcm => BulkCipherInfo {
                algorithm: CipherAlgorithm::Aes256Gcm,
                key_len: 32,
                block_size: 16,
                fixed_iv_len: 4,
                explicit_nonce_len: 8,
                kind: CipherKind::Aead,
                mac_key_len: Some(0),
                tag_len: 16,
            },
            BulkCipher::Aes128Cbc => BulkCipherInfo {
                algorithm: CipherAlgorithm::Aes128Cbc,
                key_len: 16,
                block_size: 16,
                fixed_iv_len: 16,
                explicit_nonce_len: 0,
                kind: CipherKind::Block,
                mac_key_len: None,
                tag_len: 0,
            },
            BulkCipher::Aes256Cbc => BulkCipherInfo {
                algorithm: CipherAlgorithm::Aes256Cbc,
                key_len: 32,
                block_size: 16,
                fixed_iv_len: 16,
                explicit_nonce_len: 0,
                kind: CipherKind::Block,
                mac_key_len: None,
                tag_len: 0,
            },
            BulkCipher::TripleDesEdeCbc => BulkCipherInfo {
                algorithm: CipherAlgorithm::TripleDesEdeCbc,
                key_len: 24,
                block_size: 8,
                fixed_iv_len: 8,
                explicit_nonce_len: 0,
                kind: CipherKind::Block,
                mac_key_len: None,
                tag_len: 0,
            },
            BulkCipher::ChaCha20Poly1305 => BulkCipherInfo {
                algorithm: CipherAlgorithm::ChaCha20Poly1305,
                key_len: 32,
                block_size: 0,
                fixed_iv_len: 12,
                explicit_nonce_len: 0,
                kind: CipherKind::Aead,
                mac_key_len: Some(0),
                tag_len: 16,
            },
            BulkCipher::Aes128Ccm => BulkCipherInfo {
                algorithm: CipherAlgorithm::Aes128Ccm,
                key_len: 16,
                block_size: 16,
                fixed_iv_len: 4,
                explicit_nonce_len: 8,
                kind: CipherKind::Aead,
                mac_key_len: Some(0),
                tag_len: 16,
            },
            BulkCipher::Rc4128 => BulkCipherInfo {
                algorithm: CipherAlgorithm::Rc4128,
                key_len: 16,
                block_size: 0,
                fixed_iv_len: 0,
                explicit_nonce_len: 0,
                kind: CipherKind::Stream,
                mac_key_len: None,
                tag_len: 0,
            },
        }
    }

    /// Cipher category.
    pub const fn kind(self) -> CipherKind {
        self.info().kind
    }

    /// MAC key length for this cipher with the negotiated digest.
    ///
    /// Ciphers that defer to the digest (CBC and stream ciphers) return the
    /// digest's output length; AEAD and NULL have fixed (zero) MAC keys.
    pub const fn mac_key_len(self, digest: HashAlgorithm) -> usize {
        match self.info().mac_key_len {
            Some(len) => len,
            None => digest.output_size(),
        }
    }

    /// Build the full IV for one record operation.
    ///
    /// - AEAD: `fixed_iv` from the key block concatenated with the
    ///   per-record `explicit_nonce`; a required-but-empty part is an error.
    /// - Block: a fresh random IV of `block_size` bytes (TLS 1.1+ explicit
    ///   per-record CBC IV; the IV slot in the key block is unused).
    /// - Stream / no encryption: the fixed IV verbatim, or empty.
    pub fn full_iv(
        self,
        fixed_iv: &[u8],
        explicit_nonce: &[u8],
        rng: &dyn Random,
    ) -> Result<Vec<u8>> {
        let info = self.info();
        match info.kind {
            CipherKind::Aead => {
                if info.fixed_iv_len > 0 && fixed_iv.is_empty() {
                    return Err(Error::DecodeError(format!(
                        "{} requires a {}-byte fixed IV",
                        info.algorithm.name(),
                        info.fixed_iv_len
                    )));
                }
                if info.explicit_nonce_len > 0 && explicit_nonce.is_empty() {
                    return Err(Error::DecodeError(format!(
                        "{} requires a {}-byte explicit nonce",
                        info.algorithm.name(),
                        info.explicit_nonce_len
                    )));
                }
                let mut iv = Vec::with_capacity(fixed_iv.len() + explicit_nonce.len());
                iv.extend_from_slice(fixed_iv);
                iv.extend_from_slice(explicit_nonce);
                Ok(iv)
            }
            CipherKind::Block => {
                let mut iv = vec![0u8; info.block_size];
                rng.fill(&mut iv)
                    .map_err(|e| Error::CryptoError(e.to_string()))?;
                Ok(iv)
            }
            CipherKind::Stream | CipherKind::NoEncryption => Ok(fixed_iv.to_vec()),
        }
    }
}

/// Key exchange algorithm named by a cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchangeKind {
    /// No key exchange (NULL suite)
    Null,
    /// Static RSA key transport
    Rsa,
    /// Ephemeral Diffie-Hellman signed with RSA
    DheRsa,
    /// Ephemeral ECDH signed with RSA
    EcdheRsa,
    /// Ephemeral ECDH signed with ECDSA
    EcdheEcdsa,
}

/// TLS 1.2 cipher suite.
///
/// Each variant maps its IANA-registered u16 code to the negotiated
/// key exchange, bulk cipher, and digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CipherSuite {
    /// TLS_NULL_WITH_NULL_NULL (0x0000)
    NullWithNullNull = 0x0000,

    /// TLS_RSA_WITH_RC4_128_SHA (0x0005)
    RsaWithRc4128Sha = 0x0005,

    /// TLS_RSA_WITH_3DES_EDE_CBC_SHA (0x000A)
    RsaWith3desEdeCbcSha = 0x000A,

    /// TLS_RSA_WITH_AES_128_CBC_SHA (0x002F)
    RsaWithAes128CbcSha = 0x002F,

    /// TLS_RSA_WITH_AES_256_CBC_SHA (0x0035)
    RsaWithAes256CbcSha = 0x0035,

    /// TLS_RSA_WITH_AES_128_CBC_SHA256 (0x003C)
    RsaWithAes128CbcSha256 = 0x003C,

    /// TLS_RSA_WITH_AES_128_GCM_SHA256 (0x009C)
    RsaWithAes128GcmSha256 = 0x009C,

    /// TLS_RSA_WITH_AES_256_GCM_SHA384 (0x009D)
    RsaWithAes256GcmSha384 = 0x009D,

    /// TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 (0x009E)
    DheRsaWithAes128GcmSha256 = 0x009E,

    /// TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA (0xC013)
    EcdheRsaWithAes128CbcSha = 0xC013,

    /// TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA (0xC014)
    EcdheRsaWithAes256CbcSha = 0xC014,

    /// TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 (0xC02B)
    EcdheEcdsaWithAes128GcmSha256 = 0xC02B,

    /// TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 (0xC02C)
    EcdheEcdsaWithAes256GcmSha384 = 0xC02C,

    /// TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 (0xC02F)
    EcdheRsaWithAes128GcmSha256 = 0xC02F,

    /// TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 (0xC030)
    EcdheRsaWithAes256GcmSha384 = 0xC030,

    /// TLS_ECDHE_ECDSA_WITH_AES_128_CCM (0xC0AC)
    EcdheEcdsaWithAes128Ccm = 0xC0AC,

    /// TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256 (0xCCA8)
    EcdheRsaWithChacha20Poly1305Sha256 = 0xCCA8,

    /// TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256 (0xCCA9)
    EcdheEcdsaWithChacha20Poly1305Sha256 = 0xCCA9,
}

/// Every suite in the catalog, in code order.
pub const ALL_SUITES: &[CipherSuite] = &[
    CipherSuite::NullWithNullNull,
    CipherSuite::RsaWithRc4128Sha,
    CipherSuite::RsaWith3desEdeCbcSha,
    CipherSuite::RsaWithAes128CbcSha,
    CipherSuite::RsaWithAes256CbcSha,
    CipherSuite::RsaWithAes128CbcSha256,
    CipherSuite::RsaWithAes128GcmSha256,
    CipherSuite::RsaWithAes256GcmSha384,
    CipherSuite::DheRsaWithAes128GcmSha256,
    CipherSuite::EcdheRsaWithAes128CbcSha,
    CipherSuite::EcdheRsaWithAes256CbcSha,
    CipherSuite::EcdheEcdsaWithAes128GcmSha256,
    CipherSuite::EcdheEcdsaWithAes256GcmSha384,
    CipherSuite::EcdheRsaWithAes128GcmSha256,
    CipherSuite::EcdheRsaWithAes256GcmSha384,
    CipherSuite::EcdheEcdsaWithAes128Ccm,
    CipherSuite::EcdheRsaWithChacha20Poly1305Sha256,
    CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256,
];

impl CipherSuite {
    /// Create from wire format (u16 big-endian).
    pub const fn from_code(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(CipherSuite::NullWithNullNull),
            0x0005 => Some(CipherSuite::RsaWithRc4128Sha),
            0x000A => Some(CipherSuite::RsaWith3desEdeCbcSha),
            0x002F => Some(CipherSuite::RsaWithAes128CbcSha),
            0x0035 => Some(CipherSuite::RsaWithAes256CbcSha),
            0x003C => Some(CipherSuite::RsaWithAes128CbcSha256),
            0x009C => Some(CipherSuite::RsaWithAes128GcmSha256),
            0x009D => Some(CipherSuite::RsaWithAes256GcmSha384),
            0x009E => Some(CipherSuite::DheRsaWithAes128GcmSha256),
            0xC013 => Some(CipherSuite::EcdheRsaWithAes128CbcSha),
            0xC014 => Some(CipherSuite::EcdheRsaWithAes256CbcSha),
            0xC02B => Some(CipherSuite::EcdheEcdsaWithAes128GcmSha256),
            0xC02C => Some(CipherSuite::EcdheEcdsaWithAes256GcmSha384),
            0xC02F => Some(CipherSuite::EcdheRsaWithAes128GcmSha256),
            0xC030 => Some(CipherSuite::EcdheRsaWithAes256GcmSha384),
            0xC0AC => Some(CipherSuite::EcdheEcdsaWithAes128Ccm),
            0xCCA8 => Some(CipherSuite::EcdheRsaWithChacha20Poly1305Sha256),
            0xCCA9 => Some(CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256),
            _ => None,
        }
    }

    /// Convert to wire format (u16 big-endian).
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Key exchange algorithm for this suite.
    pub const fn key_exchange(self) -> KeyExchangeKind {
        match self {
            CipherSuite::NullWithNullNull => KeyExchangeKind::Null,
            CipherSuite::RsaWithRc4128Sha
            | CipherSuite::RsaWith3desEdeCbcSha
            | CipherSuite::RsaWithAes128CbcSha
            | CipherSuite::RsaWithAes256CbcSha
            | CipherSuite::RsaWithAes128CbcSha256
            | CipherSuite::RsaWithAes128GcmSha256
            | CipherSuite::RsaWithAes256GcmSha384 => KeyExchangeKind::Rsa,
            CipherSuite::DheRsaWithAes128GcmSha256 => KeyExchangeKind::DheRsa,
            CipherSuite::EcdheRsaWithAes128CbcSha
            | CipherSuite::EcdheRsaWithAes256CbcSha
            | CipherSuite::EcdheRsaWithAes128GcmSha256
            | CipherSuite::EcdheRsaWithAes256GcmSha384
            | CipherSuite::EcdheRsaWithChacha20Poly1305Sha256 => KeyExchangeKind::EcdheRsa,
            CipherSuite::EcdheEcdsaWithAes128GcmSha256
            | CipherSuite::EcdheEcdsaWithAes256GcmSha384
            | CipherSuite::EcdheEcdsaWithAes128Ccm
            | CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256 => KeyExchangeKind::EcdheEcdsa,
        }
    }

    /// Bulk cipher for this suite.
    pub const fn bulk_cipher(self) -> BulkCipher {
        match self {
            CipherSuite::NullWithNullNull => BulkCipher::Null,
            CipherSuite::RsaWithRc4128Sha => BulkCipher::Rc4128,
            CipherSuite::RsaWith3desEdeCbcSha => BulkCipher::TripleDesEdeCbc,
            CipherSuite::RsaWithAes128CbcSha
            | CipherSuite::RsaWithAes128CbcSha256
            | CipherSuite::EcdheRsaWithAes128CbcSha => BulkCipher::Aes128Cbc,
            CipherSuite::RsaWithAes256CbcSha | CipherSuite::EcdheRsaWithAes256CbcSha => {
                BulkCipher::Aes256Cbc
            }
            CipherSuite::RsaWithAes128GcmSha256
            | CipherSuite::DheRsaWithAes128GcmSha256
            | CipherSuite::EcdheEcdsaWithAes128GcmSha256
            | CipherSuite::EcdheRsaWithAes128GcmSha256 => BulkCipher::Aes128Gcm,
            CipherSuite::RsaWithAes256GcmSha384
            | CipherSuite::EcdheEcdsaWithAes256GcmSha384
            | CipherSuite::EcdheRsaWithAes256GcmSha384 => BulkCipher::Aes256Gcm,
            CipherSuite::EcdheEcdsaWithAes128Ccm => BulkCipher::Aes128Ccm,
            CipherSuite::EcdheRsaWithChacha20Poly1305Sha256
            | CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256 => BulkCipher::ChaCha20Poly1305,
        }
    }

    /// Digest algorithm for this suite (record MAC and PRF hash).
    pub const fn digest(self) -> HashAlgorithm {
        match self {
            CipherSuite::RsaWithRc4128Sha
            | CipherSuite::RsaWith3desEdeCbcSha
            | CipherSuite::RsaWithAes128CbcSha
            | CipherSuite::RsaWithAes256CbcSha
            | CipherSuite::EcdheRsaWithAes128CbcSha
            | CipherSuite::EcdheRsaWithAes256CbcSha => HashAlgorithm::Sha1,
            CipherSuite::NullWithNullNull
            | CipherSuite::RsaWithAes128CbcSha256
            | CipherSuite::RsaWithAes128GcmSha256
            | CipherSuite::DheRsaWithAes128GcmSha256
            | CipherSuite::EcdheEcdsaWithAes128GcmSha256
            | CipherSuite::EcdheRsaWithAes128GcmSha256
            | CipherSuite::EcdheEcdsaWithAes128Ccm
            | CipherSuite::EcdheRsaWithChacha20Poly1305Sha256
            | CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256 => HashAlgorithm::Sha256,
            CipherSuite::RsaWithAes256GcmSha384
            | CipherSuite::EcdheEcdsaWithAes256GcmSha384
            | CipherSuite::EcdheRsaWithAes256GcmSha384 => HashAlgorithm::Sha384,
        }
    }

    /// PRF hash for this suite.
    ///
    /// Suites whose record MAC digest predates TLS 1.2 (SHA-1) still use
    /// SHA-256 for the PRF (RFC 5246 Section 5).
    pub const fn prf_hash(self) -> HashAlgorithm {
        match self.digest() {
            HashAlgorithm::Sha1 | HashAlgorithm::Sha256 => HashAlgorithm::Sha256,
            HashAlgorithm::Sha384 => HashAlgorithm::Sha384,
        }
    }

    /// Total key block length this suite derives, by cipher category:
    ///
    /// - AEAD: `2 * (key_len + fixed_iv_len)`
    /// - Block: `2 * (mac_key_len + key_len + block_size)`
    /// - Stream: `2 * (mac_key_len + key_len)`
    /// - No encryption: `0`
    pub const fn key_block_len(self) -> usize {
        let bulk = self.bulk_cipher();
        let info = bulk.info();
        match info.kind {
            CipherKind::Aead => 2 * (info.key_len + info.fixed_iv_len),
            CipherKind::Block => {
                2 * (bulk.mac_key_len(self.digest()) + info.key_len + info.block_size)
            }
            CipherKind::Stream => 2 * (bulk.mac_key_len(self.digest()) + info.key_len),
            CipherKind::NoEncryption => 0,
        }
    }

    /// Get the cipher suite name as registered with IANA.
    pub const fn name(self) -> &'static str {
        match self {
            CipherSuite::NullWithNullNull => "TLS_NULL_WITH_NULL_NULL",
            CipherSuite::RsaWithRc4128Sha => "TLS_RSA_WITH_RC4_128_SHA",
            CipherSuite::RsaWith3desEdeCbcSha => "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
            CipherSuite::RsaWithAes128CbcSha => "TLS_RSA_WITH_AES_128_CBC_SHA",
            CipherSuite::RsaWithAes256CbcSha => "TLS_RSA_WITH_AES_256_CBC_SHA",
            CipherSuite::RsaWithAes128CbcSha256 => "TLS_RSA_WITH_AES_128_CBC_SHA256",
            CipherSuite::RsaWithAes128GcmSha256 => "TLS_RSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::RsaWithAes256GcmSha384 => "TLS_RSA_WITH_AES_256_GCM_SHA384",
            CipherSuite::DheRsaWithAes128GcmSha256 => "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::EcdheRsaWithAes128CbcSha => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
            CipherSuite::EcdheRsaWithAes256CbcSha => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
            CipherSuite::EcdheEcdsaWithAes128GcmSha256 => {
                "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"
            }
            CipherSuite::EcdheEcdsaWithAes256GcmSha384 => {
                "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"
            }
            CipherSuite::EcdheRsaWithAes128GcmSha256 => "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::EcdheRsaWithAes256GcmSha384 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
            CipherSuite::EcdheEcdsaWithAes128Ccm => "TLS_ECDHE_ECDSA_WITH_AES_128_CCM",
            CipherSuite::EcdheRsaWithChacha20Poly1305Sha256 => {
                "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256"
            }
            CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256 => {
                "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"
            }
        }
    }

    /// Reject this suite up front if the provider cannot service its bulk
    /// cipher.
    ///
    /// This is a configuration check, not a runtime crypto failure: a suite
    /// that fails here was never usable with the active backend, and the
    /// caller should pick a different one.
    pub fn check_supported(self, provider: &dyn CryptoProvider) -> Result<()> {
        let algorithm = self.bulk_cipher().info().algorithm;
        if provider.supports_cipher(algorithm) {
            Ok(())
        } else {
            tracing::warn!(suite = self.name(), "cipher suite rejected by provider");
            Err(Error::UnsupportedCipher(format!(
                "{} requires {}, which the active crypto provider does not support",
                self.name(),
                algorithm.name()
            )))
        }
    }
}
