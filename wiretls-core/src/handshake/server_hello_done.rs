//! ServerHelloDone message (RFC 5246 Section 7.4.5).
//!
//! Empty message marking the end of the server's hello flight.

use crate::error::{Error, Result};

/// ServerHelloDone message (empty).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerHelloDone;

impl ServerHelloDone {
    /// Create a new ServerHelloDone message.
    pub const fn new() -> Self {
        ServerHelloDone
    }

    /// Encode to bytes (empty).
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if !data.is_empty() {
            return Err(Error::DecodeError(format!(
                "ServerHelloDone must be empty, got {} bytes",
                data.len()
            )));
        }
        Ok(ServerHelloDone)
    }

    /// Encoded size in bytes.
    pub const fn size(&self) -> usize {
        0
    }
}
