//! Cryptographically secure random number generator interface.

use crate::Result;

/// Random number generator trait.
///
/// Implementations must be seeded from an OS entropy source; the codec
/// uses this for explicit per-record CBC IVs, where predictability is a
/// protocol-level weakness (BEAST-style attacks).
pub trait Random: Send + Sync {
    /// Fill a buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying entropy source fails.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;

    /// Generate a random byte vector of the specified length.
    fn generate(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}
