//! HMAC (Hash-based Message Authentication Code) interface.

use crate::HashAlgorithm;

/// HMAC trait.
///
/// Provides incremental HMAC computation for the TLS 1.2 PRF and record
/// authentication.
pub trait Hmac: Send {
    /// Update the HMAC state with more data.
    fn update(&mut self, data: &[u8]);

    /// Finalize the HMAC and return the authentication tag.
    ///
    /// This consumes the HMAC state.
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Verify an HMAC tag in constant time.
    fn verify(self: Box<Self>, tag: &[u8]) -> bool {
        use subtle::ConstantTimeEq;
        let computed = self.finalize();
        computed.ct_eq(tag).into()
    }

    /// Get the output size in bytes for this HMAC.
    fn output_size(&self) -> usize;

    /// Get the hash algorithm used by this HMAC.
    fn algorithm(&self) -> HashAlgorithm;
}
