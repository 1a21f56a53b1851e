//! ServerKeyExchange message (RFC 5246 Section 7.4.3).
//!
//! The body layout depends on the negotiated key exchange algorithm
//! (DHE parameters, ECDHE parameters, and so on). The payload is kept
//! opaque here; key-exchange specific parsing happens above this layer
//! once the cipher suite is known.

use crate::error::Result;

/// ServerKeyExchange message with opaque key exchange parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerKeyExchange {
    /// Raw key exchange parameters, interpretation depends on the
    /// negotiated suite.
    pub params: Vec<u8>,
}

impl ServerKeyExchange {
    /// Create a new ServerKeyExchange message.
    pub fn new(params: Vec<u8>) -> Self {
        ServerKeyExchange { params }
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.params.clone())
    }

    /// Decode from bytes. The whole body is the parameter blob.
    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(ServerKeyExchange {
            params: data.to_vec(),
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let msg = ServerKeyExchange::new(vec![0x03, 0x00, 0x17, 0x41, 0x04]);
        let encoded = msg.encode().unwrap();
        assert_eq!(ServerKeyExchange::decode(&encoded).unwrap(), msg);
    }

    #[test]
    fn test_empty_params() {
        let msg = ServerKeyExchange::decode(&[]).unwrap();
        assert!(msg.params.is_empty());
    }
}
