//! Key block splitting.
//!
//! The PRF's "key expansion" output is carved into per-direction write
//! keys, MAC keys and IVs in a fixed order dictated by the cipher
//! category (RFC 5246 Section 6.3):
//!
//! ```text
//! client_write_MAC_key    (Block/Stream only)
//! server_write_MAC_key    (Block/Stream only)
//! client_write_key
//! server_write_key
//! client_write_IV         (AEAD fixed IV / CBC IV slot)
//! server_write_IV
//! ```
//!
//! The total length check happens before any slicing; a short key block
//! is a derivation error naming the required byte count, never an
//! out-of-bounds read.

use zeroize::Zeroizing;

use crate::cipher::{CipherKind, CipherSuite};
use crate::error::{Error, Result};

/// Per-direction traffic keys sliced from a key block.
pub struct ExchangeKeys {
    /// Client-to-server record MAC key (Block/Stream ciphers only)
    pub client_mac_key: Option<Zeroizing<Vec<u8>>>,
    /// Server-to-client record MAC key (Block/Stream ciphers only)
    pub server_mac_key: Option<Zeroizing<Vec<u8>>>,
    /// Client write key
    pub client_write_key: Zeroizing<Vec<u8>>,
    /// Server write key
    pub server_write_key: Zeroizing<Vec<u8>>,
    /// Client IV (AEAD fixed IV; empty for stream ciphers)
    pub client_iv: Zeroizing<Vec<u8>>,
    /// Server IV
    pub server_iv: Zeroizing<Vec<u8>>,
}

impl core::fmt::Debug for ExchangeKeys {
    // Key material stays out of logs; lengths are enough for diagnostics.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExchangeKeys")
            .field("mac_key_len", &self.client_mac_key.as_ref().map(|k| k.len()))
            .field("write_key_len", &self.client_write_key.len())
            .field("iv_len", &self.client_iv.len())
            .finish()
    }
}

impl ExchangeKeys {
    /// Slice a key block according to the cipher suite's layout.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientKeyBlock`] if the buffer is shorter than the
    /// suite's `key_block_len()`. Surplus bytes are ignored.
    pub fn derive(key_block: &[u8], suite: CipherSuite) -> Result<Self> {
        let required = suite.key_block_len();
        if key_block.len() < required {
            return Err(Error::InsufficientKeyBlock {
                required,
                available: key_block.len(),
            });
        }

        let bulk = suite.bulk_cipher();
        let info = bulk.info();
        let mac_len = match info.kind {
            CipherKind::Block | CipherKind::Stream => bulk.mac_key_len(suite.digest()),
            CipherKind::Aead | CipherKind::NoEncryption => 0,
        };
        let iv_len = match info.kind {
            CipherKind::Aead => info.fixed_iv_len,
            CipherKind::Block => info.block_size,
            CipherKind::Stream | CipherKind::NoEncryption => 0,
        };

        let mut offset = 0;
        let mut take = |len: usize| {
            let slice = Zeroizing::new(key_block[offset..offset + len].to_vec());
            offset += len;
            slice
        };

        let (client_mac_key, server_mac_key) = if mac_len > 0 {
            (Some(take(mac_len)), Some(take(mac_len)))
        } else {
            (None, None)
        };

        let client_write_key = take(info.key_len);
        let server_write_key = take(info.key_len);
        let client_iv = take(iv_len);
        let server_iv = take(iv_len);

        Ok(Self {
            client_mac_key,
            server_mac_key,
            client_write_key,
            server_write_key,
            client_iv,
            server_iv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_aes128gcm_layout() {
        // 2 * (16 + 4) = 40 bytes:
        // client_key(16) | server_key(16) | client_iv(4) | server_iv(4)
        let mut key_block = Vec::new();
        key_block.extend(std::iter::repeat(0xC1).take(16));
        key_block.extend(std::iter::repeat(0x51).take(16));
        key_block.extend([0xA1, 0xA2, 0xA3, 0xA4]);
        key_block.extend([0xB1, 0xB2, 0xB3, 0xB4]);

        let keys =
            ExchangeKeys::derive(&key_block, CipherSuite::EcdheRsaWithAes128GcmSha256).unwrap();

        assert!(keys.client_mac_key.is_none());
        assert!(keys.server_mac_key.is_none());
        assert_eq!(&keys.client_write_key[..], &[0xC1; 16]);
        assert_eq!(&keys.server_write_key[..], &[0x51; 16]);
        assert_eq!(&keys.client_iv[..], &[0xA1, 0xA2, 0xA3, 0xA4]);
        assert_eq!(&keys.server_iv[..], &[0xB1, 0xB2, 0xB3, 0xB4]);
    }

    #[test]
    fn test_derive_cbc_layout_has_mac_keys() {
        // AES-128-CBC-SHA: 2 * (20 + 16 + 16) = 104 bytes
        let key_block: Vec<u8> = (0..104).map(|i| i as u8).collect();
        let keys = ExchangeKeys::derive(&key_block, CipherSuite::RsaWithAes128CbcSha).unwrap();

        let client_mac = keys.client_mac_key.unwrap();
        let server_mac = keys.server_mac_key.unwrap();
        assert_eq!(client_mac.len(), 20);
        assert_eq!(&client_mac[..], &key_block[0..20]);
        assert_eq!(&server_mac[..], &key_block[20..40]);
        assert_eq!(&keys.client_write_key[..], &key_block[40..56]);
        assert_eq!(&keys.server_write_key[..], &key_block[56..72]);
        assert_eq!(keys.client_iv.len(), 16);
        assert_eq!(&keys.server_iv[..], &key_block[88..104]);
    }

    #[test]
    fn test_derive_stream_has_no_ivs() {
        // RC4-128-SHA: 2 * (20 + 16) = 72 bytes
        let key_block = vec![0x33u8; 72];
        let keys = ExchangeKeys::derive(&key_block, CipherSuite::RsaWithRc4128Sha).unwrap();
        assert!(keys.client_mac_key.is_some());
        assert!(keys.client_iv.is_empty());
        assert!(keys.server_iv.is_empty());
    }

    #[test]
    fn test_one_byte_short_names_required_count() {
        let key_block = vec![0u8; 103]; // AES-128-CBC-SHA needs 104
        let err = ExchangeKeys::derive(&key_block, CipherSuite::RsaWithAes128CbcSha).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientKeyBlock {
                required: 104,
                available: 103
            }
        );
    }

    #[test]
    fn test_exact_length_succeeds_for_all_suites() {
        for suite in crate::cipher::ALL_SUITES {
            let key_block = vec![0u8; suite.key_block_len()];
            assert!(
                ExchangeKeys::derive(&key_block, *suite).is_ok(),
                "{}",
                suite.name()
            );
        }
    }
}
