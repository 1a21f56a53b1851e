//! TLS 1.2 PRF (Pseudorandom Function) - RFC 5246 Section 5
//!
//! PRF(secret, label, seed) = P_<hash>(secret, label + seed)
//!
//! Where P_hash is defined as:
//! P_hash(secret, seed) = HMAC_hash(secret, A(1) + seed) +
//!                         HMAC_hash(secret, A(2) + seed) +
//!                         HMAC_hash(secret, A(3) + seed) + ...
//!
//! A(0) = seed
//! A(i) = HMAC_hash(secret, A(i-1))
//!
//! The output is truncated to exactly the requested length. Identical
//! inputs always produce identical output.

use wiretls_crypto::{CryptoProvider, HashAlgorithm};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// ASCII labels identifying each derivation purpose (RFC 5246, RFC 7627).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrfLabel {
    /// "master secret"
    MasterSecret,
    /// "extended master secret" (RFC 7627)
    ExtendedMasterSecret,
    /// "key expansion"
    KeyExpansion,
    /// "client finished"
    ClientFinished,
    /// "server finished"
    ServerFinished,
}

impl PrfLabel {
    /// The ASCII tag as it enters the PRF seed.
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            PrfLabel::MasterSecret => b"master secret",
            PrfLabel::ExtendedMasterSecret => b"extended master secret",
            PrfLabel::KeyExpansion => b"key expansion",
            PrfLabel::ClientFinished => b"client finished",
            PrfLabel::ServerFinished => b"server finished",
        }
    }
}

/// TLS 1.2 PRF bound to a provider and hash algorithm.
pub struct Prf<'a> {
    provider: &'a dyn CryptoProvider,
    hash: HashAlgorithm,
}

impl core::fmt::Debug for Prf<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Prf").field("hash", &self.hash).finish()
    }
}

impl<'a> Prf<'a> {
    /// Create a new PRF.
    ///
    /// `hash` is the suite's PRF hash (SHA-256 or SHA-384 in practice).
    pub fn new(provider: &'a dyn CryptoProvider, hash: HashAlgorithm) -> Self {
        Self { provider, hash }
    }

    /// P_hash iterated to exactly `output_len` bytes.
    pub fn p_hash(&self, secret: &[u8], seed: &[u8], output_len: usize) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(output_len);
        let hash_len = self.hash.output_size();

        // A(0) = seed
        let mut a = seed.to_vec();

        while output.len() < output_len {
            // A(i) = HMAC_hash(secret, A(i-1))
            a = self.hmac(secret, &[&a])?;

            // HMAC_hash(secret, A(i) + seed)
            let chunk = self.hmac(secret, &[&a, seed])?;

            let remaining = output_len - output.len();
            if remaining >= hash_len {
                output.extend_from_slice(&chunk);
            } else {
                output.extend_from_slice(&chunk[..remaining]);
            }
        }

        Ok(output)
    }

    /// PRF(secret, label, seed) = P_hash(secret, label + seed).
    pub fn derive(
        &self,
        secret: &[u8],
        label: PrfLabel,
        seed: &[u8],
        output_len: usize,
    ) -> Result<Vec<u8>> {
        let label_bytes = label.as_bytes();
        let mut label_seed = Vec::with_capacity(label_bytes.len() + seed.len());
        label_seed.extend_from_slice(label_bytes);
        label_seed.extend_from_slice(seed);
        self.p_hash(secret, &label_seed, output_len)
    }

    fn hmac(&self, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        let mut hmac = self.provider.hmac(self.hash, key)?;
        for part in parts {
            hmac.update(part);
        }
        Ok(hmac.finalize())
    }
}

fn check_random(name: &'static str, random: &[u8]) -> Result<()> {
    if random.len() != 32 {
        return Err(Error::DecodeError(format!(
            "{} must be 32 bytes, got {}",
            name,
            random.len()
        )));
    }
    Ok(())
}

/// Compute the TLS 1.2 master secret from a premaster secret.
///
/// master_secret = PRF(pre_master_secret, "master secret",
///                     ClientHello.random + ServerHello.random)[0..47]
pub fn master_secret(
    provider: &dyn CryptoProvider,
    hash: HashAlgorithm,
    premaster_secret: &[u8],
    client_random: &[u8],
    server_random: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    check_random("client random", client_random)?;
    check_random("server random", server_random)?;

    let mut seed = Vec::with_capacity(64);
    seed.extend_from_slice(client_random);
    seed.extend_from_slice(server_random);

    let prf = Prf::new(provider, hash);
    prf.derive(premaster_secret, PrfLabel::MasterSecret, &seed, 48)
        .map(Zeroizing::new)
}

/// Compute the TLS 1.2 key block from the master secret.
///
/// key_block = PRF(master_secret, "key expansion",
///                 server_random + client_random)
///
/// Note the seed order is reversed relative to the master secret
/// derivation.
pub fn key_block(
    provider: &dyn CryptoProvider,
    hash: HashAlgorithm,
    master_secret: &[u8],
    server_random: &[u8],
    client_random: &[u8],
    key_block_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    if master_secret.len() != 48 {
        return Err(Error::DecodeError(format!(
            "master secret must be 48 bytes, got {}",
            master_secret.len()
        )));
    }
    check_random("server random", server_random)?;
    check_random("client random", client_random)?;

    let mut seed = Vec::with_capacity(64);
    seed.extend_from_slice(server_random);
    seed.extend_from_slice(client_random);

    let prf = Prf::new(provider, hash);
    prf.derive(master_secret, PrfLabel::KeyExpansion, &seed, key_block_len)
        .map(Zeroizing::new)
}

/// Compute Finished verify data (12 bytes).
///
/// verify_data = PRF(master_secret, finished_label,
///                   Hash(handshake_messages))[0..11]
pub fn verify_data(
    provider: &dyn CryptoProvider,
    hash: HashAlgorithm,
    master_secret: &[u8],
    label: PrfLabel,
    handshake_hash: &[u8],
) -> Result<Vec<u8>> {
    if master_secret.len() != 48 {
        return Err(Error::DecodeError(format!(
            "master secret must be 48 bytes, got {}",
            master_secret.len()
        )));
    }
    let prf = Prf::new(provider, hash);
    prf.derive(master_secret, label, handshake_hash, 12)
}
