//! TLS 1.2 record and handshake protocol codec (RFC 5246).
//!
//! This crate implements the wire-format layer of TLS 1.2: record
//! framing and defragmentation, typed handshake messages, the cipher
//! suite catalog, PRF-based key derivation, and the slicing and
//! associated-data rules for protected records. It performs no
//! encryption itself; cryptographic primitives come from a
//! [`CryptoProvider`] and bulk ciphers are described as metadata for
//! a caller-supplied AEAD or CBC engine.
//!
//! # Layout
//!
//! - [`record`]: record header codec, fragment limits, stream I/O
//! - [`reassembly`]: handshake messages spanning record boundaries
//! - [`handshake`]: typed message bodies and coalesced-message parsing
//! - [`cipher`]: cipher suite catalog and bulk cipher metadata
//! - [`prf`] and [`keys`]: master secret, key block, verify_data
//! - [`encrypted`]: nonce/ciphertext slicing and AEAD additional data
//! - [`alert`] and [`change_cipher_spec`]: the remaining content types
//!
//! [`CryptoProvider`]: wiretls_crypto::CryptoProvider

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    unused_qualifications
)]

pub mod alert;
pub mod change_cipher_spec;
pub mod cipher;
pub mod codec;
pub mod encrypted;
pub mod error;
pub mod handshake;
pub mod keys;
pub mod prf;
pub mod protocol;
pub mod reassembly;
pub mod record;

pub use alert::{Alert, AlertDescription, AlertLevel};
pub use change_cipher_spec::ChangeCipherSpec;
pub use cipher::{BulkCipher, BulkCipherInfo, CipherKind, CipherSuite, KeyExchangeKind, ALL_SUITES};
pub use encrypted::{Aad, Encrypted, AAD_SIZE};
pub use error::{Error, Result};
pub use handshake::{Handshake, HandshakeBody, HandshakeHeader};
pub use keys::ExchangeKeys;
pub use prf::{Prf, PrfLabel};
pub use protocol::{ContentType, HandshakeType, ProtocolVersion};
pub use reassembly::HandshakeReassembler;
pub use record::{Record, RecordHeader, RecordPayload, MAX_FRAGMENT_SIZE, RECORD_HEADER_SIZE};
