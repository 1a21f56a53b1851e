//! Encrypted record payloads and AEAD associated data.
//!
//! While a cipher is active, a record's fragment is opaque ciphertext.
//! For AEAD ciphers the wire layout is `explicit_nonce || ciphertext`;
//! for block and stream ciphers the whole fragment is the ciphertext
//! (CBC's explicit IV is part of the cipher input, not a nonce in the
//! AEAD sense). [`Encrypted`] is the pure slicing view over that
//! layout, keyed on the bulk cipher's metadata.
//!
//! # Additional data (RFC 5246 Section 6.2.3.3)
//!
//! ```text
//! additional_data = seq_num (8 bytes) +
//!                   type (1 byte) +
//!                   version (2 bytes) +
//!                   length (2 bytes)
//! Total: 13 bytes
//! ```

use bytes::{Buf, BufMut};

use crate::cipher::{BulkCipher, CipherKind};
use crate::error::{Error, Result};
use crate::protocol::{ContentType, ProtocolVersion};

/// An encrypted record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    content_type: ContentType,
    raw: Vec<u8>,
}

impl Encrypted {
    /// Wrap raw ciphertext bytes as read off the wire, keeping the
    /// outer content type of the record that carried them.
    pub fn new(content_type: ContentType, raw: Vec<u8>) -> Self {
        Self { content_type, raw }
    }

    /// The outer content type of the carrying record.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The raw bytes, nonce included.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Consume into the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The explicit per-record nonce.
    ///
    /// For AEAD ciphers this is the first `explicit_nonce_len` bytes of
    /// the payload; for every other cipher category it is empty.
    pub fn nonce(&self, cipher: BulkCipher) -> Result<&[u8]> {
        let info = cipher.info();
        if info.kind != CipherKind::Aead {
            return Ok(&[]);
        }
        if self.raw.len() < info.explicit_nonce_len {
            return Err(Error::Truncated {
                context: "explicit nonce",
                needed: info.explicit_nonce_len,
                available: self.raw.len(),
            });
        }
        Ok(&self.raw[..info.explicit_nonce_len])
    }

    /// The ciphertext after the explicit nonce (the whole payload for
    /// non-AEAD ciphers).
    pub fn ciphertext(&self, cipher: BulkCipher) -> Result<&[u8]> {
        let info = cipher.info();
        if info.kind != CipherKind::Aead {
            return Ok(&self.raw);
        }
        if self.raw.len() < info.explicit_nonce_len {
            return Err(Error::Truncated {
                context: "ciphertext",
                needed: info.explicit_nonce_len,
                available: self.raw.len(),
            });
        }
        Ok(&self.raw[info.explicit_nonce_len..])
    }
}

/// Size of the encoded additional data.
pub const AAD_SIZE: usize = 13;

/// Additional authenticated data for one AEAD record operation.
///
/// Authenticated but never encrypted; `length` is the plaintext length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aad {
    /// Per-direction record sequence number
    pub sequence_number: u64,
    /// Content type of the protected record
    pub content_type: ContentType,
    /// Protocol version of the protected record
    pub version: ProtocolVersion,
    /// Plaintext length
    pub length: u16,
}

impl Aad {
    /// Encode to the fixed 13-byte wire form.
    pub fn encode(&self) -> [u8; AAD_SIZE] {
        let mut out = [0u8; AAD_SIZE];
        let mut buf = &mut out[..];
        buf.put_u64(self.sequence_number);
        buf.put_u8(self.content_type.to_u8());
        buf.put_u8(self.version.major());
        buf.put_u8(self.version.minor());
        buf.put_u16(self.length);
        out
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != AAD_SIZE {
            return Err(Error::DecodeError(format!(
                "additional data must be {} bytes, got {}",
                AAD_SIZE,
                data.len()
            )));
        }

        let mut buf = data;
        let sequence_number = buf.get_u64();
        let content_type = ContentType::from_u8(buf.get_u8())
            .ok_or_else(|| Error::DecodeError("invalid content type in AAD".into()))?;
        let version_raw = buf.get_u16();
        let version = ProtocolVersion::from_u16(version_raw).ok_or_else(|| {
            Error::DecodeError(format!("invalid protocol version {:#06x} in AAD", version_raw))
        })?;
        let length = buf.get_u16();

        Ok(Self {
            sequence_number,
            content_type,
            version,
            length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aad_layout() {
        let aad = Aad {
            sequence_number: 3,
            content_type: ContentType::ApplicationData,
            version: ProtocolVersion::Tls12,
            length: 42,
        };
        let encoded = aad.encode();
        assert_eq!(encoded.len(), 13);
        assert_eq!(&encoded[0..8], &[0, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(encoded[8], 23);
        assert_eq!(&encoded[9..11], &[0x03, 0x03]);
        assert_eq!(&encoded[11..13], &[0x00, 0x2A]);

        assert_eq!(Aad::decode(&encoded).unwrap(), aad);
    }

    #[test]
    fn test_aad_wrong_size() {
        assert!(Aad::decode(&[0u8; 12]).is_err());
        assert!(Aad::decode(&[0u8; 14]).is_err());
    }

    #[test]
    fn test_aead_nonce_split() {
        // AES-128-GCM: explicit nonce is the first 8 bytes
        let raw: Vec<u8> = (0..20).collect();
        let enc = Encrypted::new(ContentType::ApplicationData, raw.clone());

        assert_eq!(enc.nonce(BulkCipher::Aes128Gcm).unwrap(), &raw[..8]);
        assert_eq!(enc.ciphertext(BulkCipher::Aes128Gcm).unwrap(), &raw[8..]);
    }

    #[test]
    fn test_block_cipher_has_no_nonce() {
        let raw: Vec<u8> = (0..20).collect();
        let enc = Encrypted::new(ContentType::ApplicationData, raw.clone());

        assert!(enc.nonce(BulkCipher::Aes128Cbc).unwrap().is_empty());
        assert_eq!(enc.ciphertext(BulkCipher::Aes128Cbc).unwrap(), &raw[..]);
    }

    #[test]
    fn test_chacha20_has_no_explicit_nonce() {
        let raw: Vec<u8> = (0..20).collect();
        let enc = Encrypted::new(ContentType::ApplicationData, raw.clone());

        assert!(enc.nonce(BulkCipher::ChaCha20Poly1305).unwrap().is_empty());
        assert_eq!(
            enc.ciphertext(BulkCipher::ChaCha20Poly1305).unwrap(),
            &raw[..]
        );
    }

    #[test]
    fn test_short_aead_payload() {
        let enc = Encrypted::new(ContentType::ApplicationData, vec![1, 2, 3]);
        assert!(enc.nonce(BulkCipher::Aes128Gcm).is_err());
        assert!(enc.ciphertext(BulkCipher::Aes128Gcm).is_err());
    }
}
