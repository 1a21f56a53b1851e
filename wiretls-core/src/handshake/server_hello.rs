//! ServerHello message (RFC 5246 Section 7.4.1.3).
//!
//! Wire format:
//! ```text
//! struct {
//!     ProtocolVersion server_version;
//!     Random random;
//!     SessionID session_id;
//!     CipherSuite cipher_suite;
//!     CompressionMethod compression_method;
//!     select (extensions_present) {
//!         case false: struct {};
//!         case true:  Extension extensions<0..2^16-1>;
//!     };
//! } ServerHello;
//! ```

use bytes::BytesMut;

use crate::codec::{self, get_bytes, get_u16, get_u8, get_vec8};
use crate::error::{Error, Result};
use crate::protocol::ProtocolVersion;

/// ServerHello message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHello {
    /// Protocol version selected by the server.
    pub server_version: ProtocolVersion,
    /// 32-byte server random.
    pub random: [u8; 32],
    /// Session ID (0..32 bytes).
    pub session_id: Vec<u8>,
    /// Selected cipher suite code. Kept raw so unrecognized codes
    /// still decode; resolve with [`CipherSuite::from_code`].
    ///
    /// [`CipherSuite::from_code`]: crate::cipher::CipherSuite::from_code
    pub cipher_suite: u16,
    /// Selected compression method (0 = null).
    pub compression_method: u8,
    /// Raw extensions block, present only if sent on the wire.
    pub extensions: Option<Vec<u8>>,
}

impl ServerHello {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(self.size());
        buf.extend_from_slice(&[self.server_version.major(), self.server_version.minor()]);
        buf.extend_from_slice(&self.random);
        codec::put_vec8(&mut buf, &self.session_id, "ServerHello session_id")?;
        buf.extend_from_slice(&self.cipher_suite.to_be_bytes());
        buf.extend_from_slice(&[self.compression_method]);
        if let Some(extensions) = &self.extensions {
            codec::put_vec16(&mut buf, extensions, "ServerHello extensions")?;
        }
        Ok(buf.to_vec())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let major = get_u8(&mut buf, "ServerHello version")?;
        let minor = get_u8(&mut buf, "ServerHello version")?;
        let server_version = ProtocolVersion::from_u16(u16::from_be_bytes([major, minor]))
            .ok_or_else(|| {
                Error::DecodeError(format!(
                    "unknown protocol version {}.{} in ServerHello",
                    major, minor
                ))
            })?;

        let mut random = [0u8; 32];
        random.copy_from_slice(&get_bytes(&mut buf, 32, "ServerHello random")?);

        let session_id = get_vec8(&mut buf, "ServerHello session_id")?;
        if session_id.len() > 32 {
            return Err(Error::DecodeError(format!(
                "session_id too long: {} bytes",
                session_id.len()
            )));
        }

        let cipher_suite = get_u16(&mut buf, "ServerHello cipher_suite")?;
        let compression_method = get_u8(&mut buf, "ServerHello compression_method")?;

        let extensions = if buf.is_empty() {
            None
        } else {
            let ext = codec::get_vec16(&mut buf, "ServerHello extensions")?;
            if !buf.is_empty() {
                return Err(Error::DecodeError(format!(
                    "{} trailing bytes after ServerHello extensions",
                    buf.len()
                )));
            }
            Some(ext)
        };

        Ok(ServerHello {
            server_version,
            random,
            session_id,
            cipher_suite,
            compression_method,
            extensions,
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        2 + 32
            + 1
            + self.session_id.len()
            + 2
            + 1
            + self.extensions.as_ref().map_or(0, |ext| 2 + ext.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServerHello {
        ServerHello {
            server_version: ProtocolVersion::Tls12,
            random: [0xA5; 32],
            session_id: Vec::new(),
            cipher_suite: 0xC02F,
            compression_method: 0,
            extensions: None,
        }
    }

    #[test]
    fn test_round_trip() {
        let hello = sample();
        let encoded = hello.encode().unwrap();
        assert_eq!(encoded.len(), hello.size());
        assert_eq!(ServerHello::decode(&encoded).unwrap(), hello);
    }

    #[test]
    fn test_round_trip_with_extensions() {
        let mut hello = sample();
        hello.extensions = Some(vec![0xFF, 0x01, 0x00, 0x01, 0x00]);
        let encoded = hello.encode().unwrap();
        assert_eq!(ServerHello::decode(&encoded).unwrap(), hello);
    }

    #[test]
    fn test_unknown_suite_code_decodes() {
        let mut hello = sample();
        hello.cipher_suite = 0x1234;
        let encoded = hello.encode().unwrap();
        let decoded = ServerHello::decode(&encoded).unwrap();
        assert_eq!(decoded.cipher_suite, 0x1234);
    }

    #[test]
    fn test_bad_version() {
        let mut encoded = sample().encode().unwrap();
        encoded[0] = 0x04;
        assert!(ServerHello::decode(&encoded).is_err());
    }
}
