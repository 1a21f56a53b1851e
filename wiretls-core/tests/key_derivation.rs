//! Key derivation tests: PRF, key block splitting, and the cipher
//! capability guard, end to end against the default provider.

use wiretls_core::prf::{self, PrfLabel};
use wiretls_core::{BulkCipher, CipherKind, CipherSuite, Error, ExchangeKeys, Prf};
use wiretls_crypto::{CryptoProvider, HashAlgorithm};
use wiretls_crypto_rustcrypto::RustCryptoProvider;

const PREMASTER: &[u8] = &[0x55; 48];
const CLIENT_RANDOM: [u8; 32] = [0x01; 32];
const SERVER_RANDOM: [u8; 32] = [0x02; 32];

#[test]
fn master_secret_is_48_bytes_and_deterministic() {
    let provider = RustCryptoProvider::new();
    let a = prf::master_secret(
        &provider,
        HashAlgorithm::Sha256,
        PREMASTER,
        &CLIENT_RANDOM,
        &SERVER_RANDOM,
    )
    .unwrap();
    let b = prf::master_secret(
        &provider,
        HashAlgorithm::Sha256,
        PREMASTER,
        &CLIENT_RANDOM,
        &SERVER_RANDOM,
    )
    .unwrap();
    assert_eq!(a.len(), 48);
    assert_eq!(*a, *b);
    assert!(a.iter().any(|&byte| byte != 0));
}

#[test]
fn master_secret_depends_on_randoms() {
    let provider = RustCryptoProvider::new();
    let a = prf::master_secret(
        &provider,
        HashAlgorithm::Sha256,
        PREMASTER,
        &CLIENT_RANDOM,
        &SERVER_RANDOM,
    )
    .unwrap();
    // Swapped seed order must change the output.
    let b = prf::master_secret(
        &provider,
        HashAlgorithm::Sha256,
        PREMASTER,
        &SERVER_RANDOM,
        &CLIENT_RANDOM,
    )
    .unwrap();
    assert_ne!(*a, *b);
}

#[test]
fn rejects_bad_random_lengths() {
    let provider = RustCryptoProvider::new();
    assert!(prf::master_secret(
        &provider,
        HashAlgorithm::Sha256,
        PREMASTER,
        &[0u8; 31],
        &SERVER_RANDOM,
    )
    .is_err());
    assert!(prf::key_block(
        &provider,
        HashAlgorithm::Sha256,
        &[0u8; 47],
        &SERVER_RANDOM,
        &CLIENT_RANDOM,
        40,
    )
    .is_err());
}

#[test]
fn gcm_key_block_end_to_end() {
    let provider = RustCryptoProvider::new();
    let suite = CipherSuite::EcdheRsaWithAes128GcmSha256;
    suite.check_supported(&provider).unwrap();

    let master = prf::master_secret(
        &provider,
        suite.prf_hash(),
        PREMASTER,
        &CLIENT_RANDOM,
        &SERVER_RANDOM,
    )
    .unwrap();

    // AEAD suites: 2 * (16-byte key + 4-byte fixed IV) = 40.
    assert_eq!(suite.key_block_len(), 40);

    let block = prf::key_block(
        &provider,
        suite.prf_hash(),
        &master,
        &SERVER_RANDOM,
        &CLIENT_RANDOM,
        suite.key_block_len(),
    )
    .unwrap();
    assert_eq!(block.len(), 40);

    let keys = ExchangeKeys::derive(&block, suite).unwrap();
    assert!(keys.client_mac_key.is_none());
    assert!(keys.server_mac_key.is_none());
    assert_eq!(keys.client_write_key.len(), 16);
    assert_eq!(keys.server_write_key.len(), 16);
    assert_eq!(keys.client_iv.len(), 4);
    assert_eq!(keys.server_iv.len(), 4);

    // Splitting consumes the block front to back.
    assert_eq!(&*keys.client_write_key, &block[..16]);
    assert_eq!(&*keys.server_iv, &block[36..40]);
}

#[test]
fn cbc_key_block_includes_mac_keys() {
    let provider = RustCryptoProvider::new();
    let suite = CipherSuite::RsaWithAes256CbcSha;
    suite.check_supported(&provider).unwrap();

    // 2 * (20-byte MAC + 32-byte key + 16-byte IV slot) = 136.
    assert_eq!(suite.key_block_len(), 136);

    let master = prf::master_secret(
        &provider,
        suite.prf_hash(),
        PREMASTER,
        &CLIENT_RANDOM,
        &SERVER_RANDOM,
    )
    .unwrap();
    let block = prf::key_block(
        &provider,
        suite.prf_hash(),
        &master,
        &SERVER_RANDOM,
        &CLIENT_RANDOM,
        suite.key_block_len(),
    )
    .unwrap();

    let keys = ExchangeKeys::derive(&block, suite).unwrap();
    let client_mac = keys.client_mac_key.as_ref().unwrap();
    assert_eq!(client_mac.len(), 20);
    assert_eq!(&**client_mac, &block[..20]);
    assert_eq!(keys.client_write_key.len(), 32);
    assert_eq!(keys.client_iv.len(), 16);
}

#[test]
fn short_key_block_is_rejected() {
    let suite = CipherSuite::EcdheRsaWithAes128GcmSha256;
    let short = vec![0u8; suite.key_block_len() - 1];
    match ExchangeKeys::derive(&short, suite) {
        Err(Error::InsufficientKeyBlock {
            required,
            available,
        }) => {
            assert_eq!(required, 40);
            assert_eq!(available, 39);
        }
        other => panic!("expected InsufficientKeyBlock, got {:?}", other),
    }
}

#[test]
fn verify_data_labels_diverge() {
    let provider = RustCryptoProvider::new();
    let master = [0x4D; 48];
    let transcript_hash = [0x77; 32];

    let client = prf::verify_data(
        &provider,
        HashAlgorithm::Sha256,
        &master,
        PrfLabel::ClientFinished,
        &transcript_hash,
    )
    .unwrap();
    let server = prf::verify_data(
        &provider,
        HashAlgorithm::Sha256,
        &master,
        PrfLabel::ServerFinished,
        &transcript_hash,
    )
    .unwrap();
    assert_eq!(client.len(), 12);
    assert_eq!(server.len(), 12);
    assert_ne!(client, server);
}

#[test]
fn prf_output_is_prefix_consistent() {
    // P_hash output for a shorter request is a prefix of a longer one.
    let provider = RustCryptoProvider::new();
    let prf = Prf::new(&provider, HashAlgorithm::Sha256);
    let long = prf.p_hash(b"secret", b"seed", 100).unwrap();
    let short = prf.p_hash(b"secret", b"seed", 48).unwrap();
    assert_eq!(&long[..48], &short[..]);
}

#[test]
fn capability_guard_rejects_undisclaimed_ciphers() {
    let provider = RustCryptoProvider::new();

    match CipherSuite::EcdheEcdsaWithAes128Ccm.check_supported(&provider) {
        Err(Error::UnsupportedCipher(_)) => {}
        other => panic!("expected UnsupportedCipher, got {:?}", other),
    }
    match CipherSuite::RsaWithRc4128Sha.check_supported(&provider) {
        Err(Error::UnsupportedCipher(_)) => {}
        other => panic!("expected UnsupportedCipher, got {:?}", other),
    }

    // Everything the provider does implement passes.
    for &suite in wiretls_core::ALL_SUITES {
        if matches!(
            suite,
            CipherSuite::EcdheEcdsaWithAes128Ccm | CipherSuite::RsaWithRc4128Sha
        ) {
            continue;
        }
        suite.check_supported(&provider).unwrap();
    }
}

#[test]
fn full_iv_construction() {
    let provider = RustCryptoProvider::new();
    let rng = provider.random();

    // AEAD: fixed || explicit.
    let iv = BulkCipher::Aes128Gcm
        .full_iv(&[1, 2, 3, 4], &[5, 6, 7, 8, 9, 10, 11, 12], rng)
        .unwrap();
    assert_eq!(iv, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);

    // ChaCha20: the whole nonce comes from the key block.
    let iv = BulkCipher::ChaCha20Poly1305
        .full_iv(&[9; 12], &[], rng)
        .unwrap();
    assert_eq!(iv, vec![9; 12]);

    // Missing explicit part for GCM is an error.
    assert!(BulkCipher::Aes128Gcm.full_iv(&[1, 2, 3, 4], &[], rng).is_err());

    // CBC: fresh random IV of one block.
    let iv = BulkCipher::Aes256Cbc.full_iv(&[], &[], rng).unwrap();
    assert_eq!(iv.len(), 16);
    assert_eq!(BulkCipher::Aes256Cbc.info().kind, CipherKind::Block);
}
