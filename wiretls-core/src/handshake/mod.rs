//! Handshake message framing and typed bodies (RFC 5246 Section 7.4).
//!
//! Every handshake message starts with a 4-byte header:
//! ```text
//! struct {
//!     HandshakeType msg_type;    /* handshake type */
//!     uint24 length;             /* bytes in message */
//!     select (HandshakeType) {
//!         ...
//!     } body;
//! } Handshake;
//! ```
//!
//! [`Handshake`] pairs the header with a decoded [`HandshakeBody`].
//! Several messages may be coalesced into one record and one message
//! may span several records; [`parse_handshakes`] and
//! [`HandshakeReassembler`] handle both cases.
//!
//! [`HandshakeReassembler`]: crate::reassembly::HandshakeReassembler

mod certificate;
mod certificate_request;
mod certificate_verify;
mod client_hello;
mod client_key_exchange;
mod finished;
mod hello_request;
mod server_hello;
mod server_hello_done;
mod server_key_exchange;

pub use certificate::Certificate;
pub use certificate_request::CertificateRequest;
pub use certificate_verify::CertificateVerify;
pub use client_hello::ClientHello;
pub use client_key_exchange::ClientKeyExchange;
pub use finished::{Finished, VERIFY_DATA_LEN};
pub use hello_request::HelloRequest;
pub use server_hello::ServerHello;
pub use server_hello_done::ServerHelloDone;
pub use server_key_exchange::ServerKeyExchange;

use bytes::BytesMut;

use crate::codec::{self, get_u24, get_u8, need};
use crate::error::{Error, Result};
use crate::protocol::HandshakeType;

/// Size of the handshake message header (type + 24-bit length).
pub const HANDSHAKE_HEADER_SIZE: usize = 4;

/// Maximum handshake body length expressible in the 24-bit field.
pub const MAX_HANDSHAKE_SIZE: usize = 0xFF_FFFF;

/// Handshake message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakeHeader {
    /// Message type.
    pub handshake_type: HandshakeType,
    /// Body length in bytes (24-bit on the wire).
    pub length: usize,
}

impl HandshakeHeader {
    /// Create a new header.
    pub fn new(handshake_type: HandshakeType, length: usize) -> Self {
        HandshakeHeader {
            handshake_type,
            length,
        }
    }

    /// Encode the header into `buf`.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        if self.length > MAX_HANDSHAKE_SIZE {
            return Err(Error::DecodeError(format!(
                "handshake length {} exceeds the 24-bit maximum",
                self.length
            )));
        }
        buf.extend_from_slice(&[self.handshake_type.to_u8()]);
        codec::put_u24(buf, self.length, "handshake length")?;
        Ok(())
    }

    /// Decode a header, advancing `buf` past it.
    pub fn decode(buf: &mut &[u8]) -> Result<Self> {
        let type_byte = get_u8(buf, "handshake header")?;
        let handshake_type = HandshakeType::from_u8(type_byte)
            .ok_or(Error::UnknownHandshakeType(type_byte))?;
        let length = get_u24(buf, "handshake header")?;
        Ok(HandshakeHeader {
            handshake_type,
            length,
        })
    }
}

/// Decoded handshake message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakeBody {
    /// HelloRequest (empty).
    HelloRequest(HelloRequest),
    /// ClientHello.
    ClientHello(ClientHello),
    /// ServerHello.
    ServerHello(ServerHello),
    /// Certificate chain.
    Certificate(Certificate),
    /// ServerKeyExchange (opaque parameters).
    ServerKeyExchange(ServerKeyExchange),
    /// CertificateRequest.
    CertificateRequest(CertificateRequest),
    /// ServerHelloDone (empty).
    ServerHelloDone(ServerHelloDone),
    /// CertificateVerify.
    CertificateVerify(CertificateVerify),
    /// ClientKeyExchange (opaque exchange data).
    ClientKeyExchange(ClientKeyExchange),
    /// Finished with verify_data.
    Finished(Finished),
}

impl HandshakeBody {
    /// Handshake type of this body.
    pub fn handshake_type(&self) -> HandshakeType {
        match self {
            HandshakeBody::HelloRequest(_) => HandshakeType::HelloRequest,
            HandshakeBody::ClientHello(_) => HandshakeType::ClientHello,
            HandshakeBody::ServerHello(_) => HandshakeType::ServerHello,
            HandshakeBody::Certificate(_) => HandshakeType::Certificate,
            HandshakeBody::ServerKeyExchange(_) => HandshakeType::ServerKeyExchange,
            HandshakeBody::CertificateRequest(_) => HandshakeType::CertificateRequest,
            HandshakeBody::ServerHelloDone(_) => HandshakeType::ServerHelloDone,
            HandshakeBody::CertificateVerify(_) => HandshakeType::CertificateVerify,
            HandshakeBody::ClientKeyExchange(_) => HandshakeType::ClientKeyExchange,
            HandshakeBody::Finished(_) => HandshakeType::Finished,
        }
    }

    /// Encode the body to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            HandshakeBody::HelloRequest(m) => m.encode(),
            HandshakeBody::ClientHello(m) => m.encode(),
            HandshakeBody::ServerHello(m) => m.encode(),
            HandshakeBody::Certificate(m) => m.encode(),
            HandshakeBody::ServerKeyExchange(m) => m.encode(),
            HandshakeBody::CertificateRequest(m) => m.encode(),
            HandshakeBody::ServerHelloDone(m) => m.encode(),
            HandshakeBody::CertificateVerify(m) => m.encode(),
            HandshakeBody::ClientKeyExchange(m) => m.encode(),
            HandshakeBody::Finished(m) => m.encode(),
        }
    }

    /// Encoded size of the body in bytes.
    pub fn size(&self) -> usize {
        match self {
            HandshakeBody::HelloRequest(m) => m.size(),
            HandshakeBody::ClientHello(m) => m.size(),
            HandshakeBody::ServerHello(m) => m.size(),
            HandshakeBody::Certificate(m) => m.size(),
            HandshakeBody::ServerKeyExchange(m) => m.size(),
            HandshakeBody::CertificateRequest(m) => m.size(),
            HandshakeBody::ServerHelloDone(m) => m.size(),
            HandshakeBody::CertificateVerify(m) => m.size(),
            HandshakeBody::ClientKeyExchange(m) => m.size(),
            HandshakeBody::Finished(m) => m.size(),
        }
    }

    /// Decode a body of the given type from its exact byte slice.
    pub fn decode(handshake_type: HandshakeType, data: &[u8]) -> Result<Self> {
        Ok(match handshake_type {
            HandshakeType::HelloRequest => {
                HandshakeBody::HelloRequest(HelloRequest::decode(data)?)
            }
            HandshakeType::ClientHello => HandshakeBody::ClientHello(ClientHello::decode(data)?),
            HandshakeType::ServerHello => HandshakeBody::ServerHello(ServerHello::decode(data)?),
            HandshakeType::Certificate => HandshakeBody::Certificate(Certificate::decode(data)?),
            HandshakeType::ServerKeyExchange => {
                HandshakeBody::ServerKeyExchange(ServerKeyExchange::decode(data)?)
            }
            HandshakeType::CertificateRequest => {
                HandshakeBody::CertificateRequest(CertificateRequest::decode(data)?)
            }
            HandshakeType::ServerHelloDone => {
                HandshakeBody::ServerHelloDone(ServerHelloDone::decode(data)?)
            }
            HandshakeType::CertificateVerify => {
                HandshakeBody::CertificateVerify(CertificateVerify::decode(data)?)
            }
            HandshakeType::ClientKeyExchange => {
                HandshakeBody::ClientKeyExchange(ClientKeyExchange::decode(data)?)
            }
            HandshakeType::Finished => HandshakeBody::Finished(Finished::decode(data)?),
        })
    }

    fn type_name(&self) -> &'static str {
        self.handshake_type().name()
    }

    /// Borrow as ClientHello, or fail with the actual type.
    pub fn as_client_hello(&self) -> Result<&ClientHello> {
        match self {
            HandshakeBody::ClientHello(m) => Ok(m),
            other => Err(Error::TypeMismatch {
                expected: "ClientHello",
                actual: other.type_name(),
            }),
        }
    }

    /// Borrow as ServerHello, or fail with the actual type.
    pub fn as_server_hello(&self) -> Result<&ServerHello> {
        match self {
            HandshakeBody::ServerHello(m) => Ok(m),
            other => Err(Error::TypeMismatch {
                expected: "ServerHello",
                actual: other.type_name(),
            }),
        }
    }

    /// Borrow as Certificate, or fail with the actual type.
    pub fn as_certificate(&self) -> Result<&Certificate> {
        match self {
            HandshakeBody::Certificate(m) => Ok(m),
            other => Err(Error::TypeMismatch {
                expected: "Certificate",
                actual: other.type_name(),
            }),
        }
    }

    /// Borrow as ServerKeyExchange, or fail with the actual type.
    pub fn as_server_key_exchange(&self) -> Result<&ServerKeyExchange> {
        match self {
            HandshakeBody::ServerKeyExchange(m) => Ok(m),
            other => Err(Error::TypeMismatch {
                expected: "ServerKeyExchange",
                actual: other.type_name(),
            }),
        }
    }

    /// Borrow as ClientKeyExchange, or fail with the actual type.
    pub fn as_client_key_exchange(&self) -> Result<&ClientKeyExchange> {
        match self {
            HandshakeBody::ClientKeyExchange(m) => Ok(m),
            other => Err(Error::TypeMismatch {
                expected: "ClientKeyExchange",
                actual: other.type_name(),
            }),
        }
    }

    /// Borrow as Finished, or fail with the actual type.
    pub fn as_finished(&self) -> Result<&Finished> {
        match self {
            HandshakeBody::Finished(m) => Ok(m),
            other => Err(Error::TypeMismatch {
                expected: "Finished",
                actual: other.type_name(),
            }),
        }
    }
}

/// Complete handshake message: header plus decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    /// Message header.
    pub header: HandshakeHeader,
    /// Decoded body.
    pub body: HandshakeBody,
}

impl Handshake {
    /// Wrap a body in a message, computing the header length from the
    /// body's encoded size.
    pub fn new(body: HandshakeBody) -> Self {
        let header = HandshakeHeader::new(body.handshake_type(), body.size());
        Handshake { header, body }
    }

    /// Pair a body with a caller-supplied header, keeping the header
    /// verbatim.
    ///
    /// Unlike [`Handshake::new`] this does not recompute the length
    /// field, so a message read off the wire re-serializes byte for
    /// byte even when the caller rebuilt it from its parts.
    pub fn with_header(header: HandshakeHeader, body: HandshakeBody) -> Self {
        Handshake { header, body }
    }

    /// Encode header and body to bytes.
    ///
    /// The stored header is emitted as-is; [`Handshake::new`] and
    /// [`Handshake::decode`] keep it consistent with the body.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let body = self.body.encode()?;
        let mut buf = BytesMut::with_capacity(HANDSHAKE_HEADER_SIZE + body.len());
        self.header.encode(&mut buf)?;
        buf.extend_from_slice(&body);
        Ok(buf.to_vec())
    }

    /// Decode one complete message from the start of `data`.
    ///
    /// Fails if `data` holds less than the header plus the declared
    /// body length. Trailing bytes after the message are ignored; use
    /// [`parse_handshakes`] to consume a whole buffer.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let header = HandshakeHeader::decode(&mut buf)?;
        need(buf, header.length, "handshake body")?;
        let body = HandshakeBody::decode(header.handshake_type, &buf[..header.length])?;
        Ok(Handshake { header, body })
    }

    /// Total encoded size (header plus body).
    pub fn size(&self) -> usize {
        HANDSHAKE_HEADER_SIZE + self.body.size()
    }

    /// Message type, from the header.
    pub fn handshake_type(&self) -> HandshakeType {
        self.header.handshake_type
    }
}

/// Parse as many complete handshake messages as `data` holds.
///
/// Returns the messages and the number of bytes consumed. A trailing
/// partial message is left unconsumed rather than treated as an error,
/// since a message may continue in the next record.
pub fn parse_handshakes(data: &[u8]) -> Result<(Vec<Handshake>, usize)> {
    let mut messages = Vec::new();
    let mut offset = 0;

    while data.len() - offset >= HANDSHAKE_HEADER_SIZE {
        let mut header_buf = &data[offset..];
        let header = HandshakeHeader::decode(&mut header_buf)?;
        let total = HANDSHAKE_HEADER_SIZE + header.length;
        if data.len() - offset < total {
            break;
        }
        let body_start = offset + HANDSHAKE_HEADER_SIZE;
        let body = HandshakeBody::decode(header.handshake_type, &data[body_start..offset + total])?;
        messages.push(Handshake { header, body });
        offset += total;
    }

    Ok((messages, offset))
}
