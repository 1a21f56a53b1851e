//! HelloRequest message (RFC 5246 Section 7.4.1.1).
//!
//! Empty message a server may send to ask the client to begin
//! renegotiation.

use crate::error::{Error, Result};

/// HelloRequest message (empty).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelloRequest;

impl HelloRequest {
    /// Create a new HelloRequest message.
    pub const fn new() -> Self {
        HelloRequest
    }

    /// Encode to bytes (empty).
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if !data.is_empty() {
            return Err(Error::DecodeError(format!(
                "HelloRequest must be empty, got {} bytes",
                data.len()
            )));
        }
        Ok(HelloRequest)
    }

    /// Encoded size in bytes.
    pub const fn size(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_request() {
        let msg = HelloRequest::new();
        let encoded = msg.encode().unwrap();
        assert!(encoded.is_empty());
        assert_eq!(HelloRequest::decode(&encoded).unwrap(), msg);
        assert!(HelloRequest::decode(&[0]).is_err());
    }
}
