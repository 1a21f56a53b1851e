//! Change cipher spec protocol.
//!
//! A single-byte marker (value 1) signaling that subsequent records in
//! that direction use the newly negotiated cipher state.

use crate::error::{Error, Result};

/// ChangeCipherSpec message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCipherSpec;

impl ChangeCipherSpec {
    /// The only legal wire value.
    pub const VALUE: u8 = 1;

    /// Create a new ChangeCipherSpec message.
    pub const fn new() -> Self {
        ChangeCipherSpec
    }

    /// Encode to the 1-byte wire form.
    pub const fn encode(self) -> [u8; 1] {
        [Self::VALUE]
    }

    /// Decode from bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != 1 {
            return Err(Error::DecodeError(format!(
                "change_cipher_spec must be 1 byte, got {}",
                data.len()
            )));
        }
        if data[0] != Self::VALUE {
            return Err(Error::DecodeError(format!(
                "invalid change_cipher_spec value {}",
                data[0]
            )));
        }
        Ok(ChangeCipherSpec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let encoded = ChangeCipherSpec::new().encode();
        assert_eq!(encoded, [1]);
        assert_eq!(ChangeCipherSpec::decode(&encoded).unwrap(), ChangeCipherSpec);
    }

    #[test]
    fn test_invalid_value() {
        assert!(ChangeCipherSpec::decode(&[0]).is_err());
        assert!(ChangeCipherSpec::decode(&[2]).is_err());
        assert!(ChangeCipherSpec::decode(&[]).is_err());
        assert!(ChangeCipherSpec::decode(&[1, 1]).is_err());
    }
}
