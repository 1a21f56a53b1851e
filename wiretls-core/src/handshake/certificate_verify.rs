//! CertificateVerify message (RFC 5246 Section 7.4.8).
//!
//! Wire format:
//! ```text
//! struct {
//!     SignatureAndHashAlgorithm algorithm;
//!     opaque signature<0..2^16-1>;
//! } CertificateVerify;
//! ```

use bytes::BytesMut;

use crate::codec::{self, get_u8, get_vec16};
use crate::error::{Error, Result};

/// CertificateVerify message proving possession of the client's
/// certificate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateVerify {
    /// Hash and signature algorithm pair, e.g. `[0x04, 0x01]` for
    /// SHA-256 with RSA.
    pub algorithm: [u8; 2],
    /// Signature over the handshake transcript.
    pub signature: Vec<u8>,
}

impl CertificateVerify {
    /// Create a new CertificateVerify message.
    pub fn new(algorithm: [u8; 2], signature: Vec<u8>) -> Self {
        CertificateVerify {
            algorithm,
            signature,
        }
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(self.size());
        buf.extend_from_slice(&self.algorithm);
        codec::put_vec16(&mut buf, &self.signature, "CertificateVerify signature")?;
        Ok(buf.to_vec())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let hash = get_u8(&mut buf, "CertificateVerify algorithm")?;
        let sig = get_u8(&mut buf, "CertificateVerify algorithm")?;
        let signature = get_vec16(&mut buf, "CertificateVerify signature")?;
        if !buf.is_empty() {
            return Err(Error::DecodeError(format!(
                "{} trailing bytes after CertificateVerify",
                buf.len()
            )));
        }
        Ok(CertificateVerify {
            algorithm: [hash, sig],
            signature,
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        2 + 2 + self.signature.len()
    }
}
