//! CertificateRequest message (RFC 5246 Section 7.4.4).
//!
//! Wire format:
//! ```text
//! struct {
//!     ClientCertificateType certificate_types<1..2^8-1>;
//!     SignatureAndHashAlgorithm supported_signature_algorithms<2..2^16-2>;
//!     DistinguishedName certificate_authorities<0..2^16-1>;
//! } CertificateRequest;
//! ```
//!
//! The signature algorithm and CA blocks are kept as raw bytes; their
//! internal structure is only needed by certificate selection logic.

use bytes::BytesMut;

use crate::codec::{self, get_vec16, get_vec8};
use crate::error::{Error, Result};

/// CertificateRequest message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateRequest {
    /// Acceptable certificate types (1 = rsa_sign, 64 = ecdsa_sign, ...).
    pub certificate_types: Vec<u8>,
    /// Raw supported_signature_algorithms block (pairs of hash/sig bytes).
    pub supported_signature_algorithms: Vec<u8>,
    /// Raw certificate_authorities block (DER distinguished names).
    pub certificate_authorities: Vec<u8>,
}

impl CertificateRequest {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(self.size());
        codec::put_vec8(&mut buf, &self.certificate_types, "certificate_types")?;
        codec::put_vec16(
            &mut buf,
            &self.supported_signature_algorithms,
            "supported_signature_algorithms",
        )?;
        codec::put_vec16(&mut buf, &self.certificate_authorities, "certificate_authorities")?;
        Ok(buf.to_vec())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let certificate_types = get_vec8(&mut buf, "certificate_types")?;
        let supported_signature_algorithms =
            get_vec16(&mut buf, "supported_signature_algorithms")?;
        if supported_signature_algorithms.len() % 2 != 0 {
            return Err(Error::DecodeError(
                "supported_signature_algorithms length is not a multiple of 2".into(),
            ));
        }
        let certificate_authorities = get_vec16(&mut buf, "certificate_authorities")?;
        if !buf.is_empty() {
            return Err(Error::DecodeError(format!(
                "{} trailing bytes after CertificateRequest",
                buf.len()
            )));
        }
        Ok(CertificateRequest {
            certificate_types,
            supported_signature_algorithms,
            certificate_authorities,
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        1 + self.certificate_types.len()
            + 2
            + self.supported_signature_algorithms.len()
            + 2
            + self.certificate_authorities.len()
    }
}
