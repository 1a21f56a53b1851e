//! Certificate message (RFC 5246 Section 7.4.2).
//!
//! Wire format:
//! ```text
//! opaque ASN.1Cert<1..2^24-1>;
//!
//! struct {
//!     ASN.1Cert certificate_list<0..2^24-1>;
//! } Certificate;
//! ```
//!
//! Each certificate is an opaque DER blob. An empty list is legal
//! (a client with no certificate answers a CertificateRequest this way).

use bytes::BytesMut;

use crate::codec::{self, get_vec24};
use crate::error::{Error, Result};

/// Certificate message carrying a chain of DER-encoded certificates,
/// leaf first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Certificate {
    /// Certificate chain, each entry an opaque DER blob.
    pub certificate_list: Vec<Vec<u8>>,
}

impl Certificate {
    /// Create a new Certificate message.
    pub fn new(certificate_list: Vec<Vec<u8>>) -> Self {
        Certificate { certificate_list }
    }

    /// Create an empty Certificate message.
    pub fn empty() -> Self {
        Certificate {
            certificate_list: Vec::new(),
        }
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut list = BytesMut::new();
        for cert in &self.certificate_list {
            codec::put_vec24(&mut list, cert, "certificate entry")?;
        }
        let mut buf = BytesMut::with_capacity(3 + list.len());
        codec::put_vec24(&mut buf, &list, "certificate_list")?;
        Ok(buf.to_vec())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let list = get_vec24(&mut buf, "certificate_list")?;
        if !buf.is_empty() {
            return Err(Error::DecodeError(format!(
                "{} trailing bytes after certificate_list",
                buf.len()
            )));
        }

        let mut certificate_list = Vec::new();
        let mut entries = list.as_slice();
        while !entries.is_empty() {
            certificate_list.push(get_vec24(&mut entries, "certificate entry")?);
        }

        Ok(Certificate { certificate_list })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        3 + self
            .certificate_list
            .iter()
            .map(|cert| 3 + cert.len())
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let msg = Certificate::new(vec![vec![0x30, 0x82, 0x01, 0x00], vec![0x30, 0x03]]);
        let encoded = msg.encode().unwrap();
        assert_eq!(encoded.len(), msg.size());
        assert_eq!(Certificate::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn test_empty_chain() {
        let msg = Certificate::empty();
        let encoded = msg.encode().unwrap();
        assert_eq!(encoded, vec![0, 0, 0]);
        assert_eq!(Certificate::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn test_truncated_entry() {
        // Outer list claims 5 bytes but the entry claims 10.
        let data = [0x00, 0x00, 0x05, 0x00, 0x00, 0x0A, 0x01, 0x02];
        assert!(Certificate::decode(&data).is_err());
    }

    #[test]
    fn test_trailing_bytes() {
        let mut encoded = Certificate::empty().encode().unwrap();
        encoded.push(0xFF);
        assert!(Certificate::decode(&encoded).is_err());
    }
}
