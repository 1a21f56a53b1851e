//! HMAC implementations using the RustCrypto `hmac` crate.

use hmac::Mac;
use sha1::Sha1;
use sha2::{Sha256, Sha384};
use wiretls_crypto::{Error, HashAlgorithm, Hmac, Result};

/// Create an HMAC instance for the specified hash algorithm.
pub fn create_hmac(algorithm: HashAlgorithm, key: &[u8]) -> Result<Box<dyn Hmac>> {
    match algorithm {
        HashAlgorithm::Sha1 => Ok(Box::new(HmacSha1Impl::new(key)?)),
        HashAlgorithm::Sha256 => Ok(Box::new(HmacSha256Impl::new(key)?)),
        HashAlgorithm::Sha384 => Ok(Box::new(HmacSha384Impl::new(key)?)),
    }
}

macro_rules! hmac_impl {
    ($name:ident, $hash:ty, $alg:expr, $size:expr) => {
        struct $name {
            mac: hmac::Hmac<$hash>,
        }

        impl $name {
            fn new(key: &[u8]) -> Result<Self> {
                let mac = <hmac::Hmac<$hash>>::new_from_slice(key)
                    .map_err(|_| Error::InvalidKeyLength)?;
                Ok(Self { mac })
            }
        }

        impl Hmac for $name {
            fn update(&mut self, data: &[u8]) {
                self.mac.update(data);
            }

            fn finalize(self: Box<Self>) -> Vec<u8> {
                self.mac.finalize().into_bytes().to_vec()
            }

            fn output_size(&self) -> usize {
                $size
            }

            fn algorithm(&self) -> HashAlgorithm {
                $alg
            }
        }
    };
}

hmac_impl!(HmacSha1Impl, Sha1, HashAlgorithm::Sha1, 20);
hmac_impl!(HmacSha256Impl, Sha256, HashAlgorithm::Sha256, 32);
hmac_impl!(HmacSha384Impl, Sha384, HashAlgorithm::Sha384, 48);
