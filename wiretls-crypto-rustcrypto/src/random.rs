//! Cryptographically secure random number generation via the OS.

use rand::rngs::OsRng;
use rand::RngCore;
use wiretls_crypto::{Error, Random, Result};

/// Random number generator backed by the OS entropy source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl Random for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::RandomFailed(e.to_string()))
    }
}
