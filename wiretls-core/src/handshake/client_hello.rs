//! ClientHello message (RFC 5246 Section 7.4.1.2).
//!
//! Wire format:
//! ```text
//! struct {
//!     ProtocolVersion client_version;
//!     Random random;
//!     SessionID session_id;                      // <0..32>
//!     CipherSuite cipher_suites<2..2^16-2>;
//!     CompressionMethod compression_methods<1..2^8-1>;
//!     select (extensions_present) {
//!         case false: struct {};
//!         case true:  Extension extensions<0..2^16-1>;
//!     };
//! } ClientHello;
//! ```
//!
//! The extensions block is only present when bytes remain after the
//! compression methods, per the RFC's extensions_present rule.

use bytes::BytesMut;

use crate::codec::{self, get_bytes, get_u8, get_vec8};
use crate::error::{Error, Result};
use crate::protocol::ProtocolVersion;

/// ClientHello message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHello {
    /// Highest protocol version supported by the client.
    pub client_version: ProtocolVersion,
    /// 32-byte client random.
    pub random: [u8; 32],
    /// Session ID for resumption (0..32 bytes).
    pub session_id: Vec<u8>,
    /// Cipher suite codes offered, in preference order.
    pub cipher_suites: Vec<u16>,
    /// Compression methods offered (0 = null).
    pub compression_methods: Vec<u8>,
    /// Raw extensions block, present only if sent on the wire.
    pub extensions: Option<Vec<u8>>,
}

impl ClientHello {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(self.size());
        buf.extend_from_slice(&[self.client_version.major(), self.client_version.minor()]);
        buf.extend_from_slice(&self.random);
        codec::put_vec8(&mut buf, &self.session_id, "ClientHello session_id")?;
        let mut suites = Vec::with_capacity(self.cipher_suites.len() * 2);
        for suite in &self.cipher_suites {
            suites.extend_from_slice(&suite.to_be_bytes());
        }
        codec::put_vec16(&mut buf, &suites, "ClientHello cipher_suites")?;
        codec::put_vec8(&mut buf, &self.compression_methods, "ClientHello compression_methods")?;
        if let Some(extensions) = &self.extensions {
            codec::put_vec16(&mut buf, extensions, "ClientHello extensions")?;
        }
        Ok(buf.to_vec())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let major = get_u8(&mut buf, "ClientHello version")?;
        let minor = get_u8(&mut buf, "ClientHello version")?;
        let client_version = ProtocolVersion::from_u16(u16::from_be_bytes([major, minor]))
            .ok_or_else(|| {
                Error::DecodeError(format!(
                    "unknown protocol version {}.{} in ClientHello",
                    major, minor
                ))
            })?;

        let mut random = [0u8; 32];
        random.copy_from_slice(&get_bytes(&mut buf, 32, "ClientHello random")?);

        let session_id = get_vec8(&mut buf, "ClientHello session_id")?;
        if session_id.len() > 32 {
            return Err(Error::DecodeError(format!(
                "session_id too long: {} bytes",
                session_id.len()
            )));
        }

        let suite_bytes = codec::get_vec16(&mut buf, "ClientHello cipher_suites")?;
        if suite_bytes.len() % 2 != 0 {
            return Err(Error::DecodeError(
                "cipher_suites length is not a multiple of 2".into(),
            ));
        }
        let cipher_suites = suite_bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();

        let compression_methods = get_vec8(&mut buf, "ClientHello compression_methods")?;

        // Extensions are present only when bytes remain.
        let extensions = if buf.is_empty() {
            None
        } else {
            let ext = codec::get_vec16(&mut buf, "ClientHello extensions")?;
            if !buf.is_empty() {
                return Err(Error::DecodeError(format!(
                    "{} trailing bytes after ClientHello extensions",
                    buf.len()
                )));
            }
            Some(ext)
        };

        Ok(ClientHello {
            client_version,
            random,
            session_id,
            cipher_suites,
            compression_methods,
            extensions,
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        2 + 32
            + 1
            + self.session_id.len()
            + 2
            + self.cipher_suites.len() * 2
            + 1
            + self.compression_methods.len()
            + self.extensions.as_ref().map_or(0, |ext| 2 + ext.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClientHello {
        ClientHello {
            client_version: ProtocolVersion::Tls12,
            random: [0x42; 32],
            session_id: vec![1, 2, 3],
            cipher_suites: vec![0xC02F, 0x009C, 0x002F],
            compression_methods: vec![0],
            extensions: None,
        }
    }

    #[test]
    fn test_round_trip_without_extensions() {
        let hello = sample();
        let encoded = hello.encode().unwrap();
        assert_eq!(encoded.len(), hello.size());
        let decoded = ClientHello::decode(&encoded).unwrap();
        assert_eq!(decoded, hello);
        assert!(decoded.extensions.is_none());
    }

    #[test]
    fn test_round_trip_with_extensions() {
        let mut hello = sample();
        hello.extensions = Some(vec![0x00, 0x0D, 0x00, 0x02, 0x04, 0x01]);
        let encoded = hello.encode().unwrap();
        let decoded = ClientHello::decode(&encoded).unwrap();
        assert_eq!(decoded, hello);
    }

    #[test]
    fn test_truncated() {
        let encoded = sample().encode().unwrap();
        assert!(ClientHello::decode(&encoded[..encoded.len() - 1]).is_err());
        assert!(ClientHello::decode(&encoded[..10]).is_err());
    }

    #[test]
    fn test_trailing_bytes_after_extensions() {
        let mut hello = sample();
        hello.extensions = Some(vec![]);
        let mut encoded = hello.encode().unwrap();
        encoded.push(0xFF);
        assert!(ClientHello::decode(&encoded).is_err());
    }

    #[test]
    fn test_odd_cipher_suite_bytes() {
        let mut encoded = sample().encode().unwrap();
        // Session ID is 3 bytes, so the suite list length sits at 2+32+1+3.
        let offset = 2 + 32 + 1 + 3;
        encoded[offset] = 0;
        encoded[offset + 1] = 3;
        let result = ClientHello::decode(&encoded[..offset + 2 + 3]);
        assert!(result.is_err());
    }
}
