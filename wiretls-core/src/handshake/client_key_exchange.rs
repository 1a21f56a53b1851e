//! ClientKeyExchange message (RFC 5246 Section 7.4.7).
//!
//! Carries either an RSA-encrypted premaster secret or the client's
//! (EC)DH public value. The interpretation depends on the negotiated
//! key exchange, so the payload stays opaque here.

use crate::error::Result;

/// ClientKeyExchange message with opaque exchange data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientKeyExchange {
    /// Raw exchange data, interpretation depends on the key exchange
    /// algorithm.
    pub exchange_data: Vec<u8>,
}

impl ClientKeyExchange {
    /// Create a new ClientKeyExchange message.
    pub fn new(exchange_data: Vec<u8>) -> Self {
        ClientKeyExchange { exchange_data }
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.exchange_data.clone())
    }

    /// Decode from bytes. The whole body is the exchange data.
    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(ClientKeyExchange {
            exchange_data: data.to_vec(),
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.exchange_data.len()
    }
}
