//! Finished message (RFC 5246 Section 7.4.9).
//!
//! Carries the PRF verify_data over the handshake transcript. TLS 1.2
//! uses 12 bytes, but the length is negotiable per cipher suite, so
//! the body is kept as raw bytes.

use crate::error::Result;

/// Length of verify_data for all suites defined by RFC 5246.
pub const VERIFY_DATA_LEN: usize = 12;

/// Finished message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finished {
    /// PRF output over the session hash, see [`verify_data`].
    ///
    /// [`verify_data`]: crate::prf::verify_data
    pub verify_data: Vec<u8>,
}

impl Finished {
    /// Create a new Finished message.
    pub fn new(verify_data: Vec<u8>) -> Self {
        Finished { verify_data }
    }

    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.verify_data.clone())
    }

    /// Decode from bytes. The whole body is the verify_data.
    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(Finished {
            verify_data: data.to_vec(),
        })
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.verify_data.len()
    }
}
