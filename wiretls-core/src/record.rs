//! TLS record layer framing (RFC 5246 Section 6.2.1).
//!
//! Wire format of a record:
//! ```text
//! struct {
//!     ContentType type;          /* 1 byte  */
//!     ProtocolVersion version;   /* 2 bytes */
//!     uint16 length;             /* 2 bytes */
//!     opaque fragment[TLSPlaintext.length];
//! } TLSPlaintext;
//! ```
//!
//! A fragment may hold several coalesced handshake messages, or only
//! part of one; [`Record::payload`] parses whatever the fragment
//! holds, and [`HandshakeReassembler`] stitches fragments back
//! together across record boundaries.
//!
//! [`HandshakeReassembler`]: crate::reassembly::HandshakeReassembler

use std::io;

use bytes::BytesMut;

use crate::alert::Alert;
use crate::change_cipher_spec::ChangeCipherSpec;
use crate::codec::{get_u16, get_u8};
use crate::encrypted::Encrypted;
use crate::error::{Error, Result};
use crate::handshake::{parse_handshakes, Handshake};
use crate::protocol::{ContentType, ProtocolVersion};

/// Size of the record header on the wire.
pub const RECORD_HEADER_SIZE: usize = 5;

/// Maximum plaintext fragment length (2^14, RFC 5246 Section 6.2.1).
pub const MAX_FRAGMENT_SIZE: usize = 16384;

/// Record header: content type, version, fragment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Content type of the fragment.
    pub content_type: ContentType,
    /// Record layer protocol version.
    pub version: ProtocolVersion,
    /// Fragment length in bytes.
    pub length: u16,
}

impl RecordHeader {
    /// Create a new record header.
    pub fn new(content_type: ContentType, version: ProtocolVersion, length: u16) -> Self {
        RecordHeader {
            content_type,
            version,
            length,
        }
    }

    /// Encode to the 5-byte wire form.
    pub fn encode(&self) -> [u8; RECORD_HEADER_SIZE] {
        let len = self.length.to_be_bytes();
        [
            self.content_type.to_u8(),
            self.version.major(),
            self.version.minor(),
            len[0],
            len[1],
        ]
    }

    /// Decode from the wire, advancing `buf` past the header.
    ///
    /// Enforces the fragment length limit: a declared length above
    /// 2^14 is a `record_overflow` condition.
    pub fn decode(buf: &mut &[u8]) -> Result<Self> {
        let type_byte = get_u8(buf, "record header")?;
        let content_type = ContentType::from_u8(type_byte).ok_or_else(|| {
            Error::DecodeError(format!("unknown content type {}", type_byte))
        })?;
        let major = get_u8(buf, "record header")?;
        let minor = get_u8(buf, "record header")?;
        let version = ProtocolVersion::from_u16(u16::from_be_bytes([major, minor]))
            .ok_or_else(|| {
                Error::DecodeError(format!(
                    "unknown protocol version {}.{} in record header",
                    major, minor
                ))
            })?;
        let length = get_u16(buf, "record header")?;
        if length as usize > MAX_FRAGMENT_SIZE {
            return Err(Error::RecordOverflow {
                length: length as usize,
            });
        }
        Ok(RecordHeader {
            content_type,
            version,
            length,
        })
    }
}

/// Parsed content of a record fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordPayload {
    /// Zero or more complete handshake messages. A trailing partial
    /// message makes the fragment unparseable here; feed it to a
    /// reassembler instead.
    Handshake(Vec<Handshake>),
    /// A single alert.
    Alert(Alert),
    /// The ChangeCipherSpec marker.
    ChangeCipherSpec(ChangeCipherSpec),
    /// Opaque application data.
    ApplicationData(Vec<u8>),
    /// Protected payload awaiting decryption.
    Encrypted(Encrypted),
}

impl RecordPayload {
    /// Content type this payload travels under.
    pub fn content_type(&self) -> ContentType {
        match self {
            RecordPayload::Handshake(_) => ContentType::Handshake,
            RecordPayload::Alert(_) => ContentType::Alert,
            RecordPayload::ChangeCipherSpec(_) => ContentType::ChangeCipherSpec,
            RecordPayload::ApplicationData(_) => ContentType::ApplicationData,
            RecordPayload::Encrypted(enc) => enc.content_type(),
        }
    }
}

/// A complete record: header plus raw fragment bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record header. Its length always matches `fragment.len()`.
    pub header: RecordHeader,
    /// Raw fragment bytes.
    pub fragment: Vec<u8>,
}

impl Record {
    /// Create a record over `fragment`, computing the header length.
    ///
    /// Fails with [`Error::RecordOverflow`] if the fragment exceeds
    /// 2^14 bytes.
    pub fn new(
        content_type: ContentType,
        version: ProtocolVersion,
        fragment: Vec<u8>,
    ) -> Result<Self> {
        if fragment.len() > MAX_FRAGMENT_SIZE {
            return Err(Error::RecordOverflow {
                length: fragment.len(),
            });
        }
        Ok(Record {
            header: RecordHeader::new(content_type, version, fragment.len() as u16),
            fragment,
        })
    }

    /// Encode header and fragment to bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(RECORD_HEADER_SIZE + self.fragment.len());
        buf.extend_from_slice(&self.header.encode());
        buf.extend_from_slice(&self.fragment);
        buf.to_vec()
    }

    /// Write the record to `writer`.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.header.encode())?;
        writer.write_all(&self.fragment)?;
        Ok(())
    }

    /// Decode one record from the start of `data`, returning it and
    /// the number of bytes consumed.
    pub fn decode(data: &[u8]) -> Result<(Self, usize)> {
        let mut buf = data;
        let header = RecordHeader::decode(&mut buf)?;
        let length = header.length as usize;
        crate::codec::need(buf, length, "record fragment")?;
        let fragment = buf[..length].to_vec();
        Ok((Record { header, fragment }, RECORD_HEADER_SIZE + length))
    }

    /// Read one record from a stream.
    ///
    /// Short reads report how many bytes were expected and how many
    /// arrived before EOF.
    pub fn read_from<R: io::Read>(reader: &mut R) -> Result<Self> {
        let mut header_bytes = [0u8; RECORD_HEADER_SIZE];
        read_exact_counting(reader, &mut header_bytes, "record header")?;
        let mut header_slice = &header_bytes[..];
        let header = RecordHeader::decode(&mut header_slice)?;

        let mut fragment = vec![0u8; header.length as usize];
        read_exact_counting(reader, &mut fragment, "record fragment")?;
        Ok(Record { header, fragment })
    }

    /// Parse the fragment according to the header's content type.
    ///
    /// For handshake records this requires every message in the
    /// fragment to be complete; a fragment that ends mid-message is
    /// rejected. Use [`HandshakeReassembler`] when messages may span
    /// records.
    ///
    /// [`HandshakeReassembler`]: crate::reassembly::HandshakeReassembler
    pub fn payload(&self) -> Result<RecordPayload> {
        match self.header.content_type {
            ContentType::Handshake => {
                let (messages, consumed) = parse_handshakes(&self.fragment)?;
                if consumed != self.fragment.len() {
                    return Err(Error::DecodeError(format!(
                        "handshake fragment ends mid-message ({} of {} bytes parsed)",
                        consumed,
                        self.fragment.len()
                    )));
                }
                Ok(RecordPayload::Handshake(messages))
            }
            ContentType::Alert => Ok(RecordPayload::Alert(Alert::decode(&self.fragment)?)),
            ContentType::ChangeCipherSpec => Ok(RecordPayload::ChangeCipherSpec(
                ChangeCipherSpec::decode(&self.fragment)?,
            )),
            ContentType::ApplicationData => {
                Ok(RecordPayload::ApplicationData(self.fragment.clone()))
            }
            ContentType::Heartbeat => Err(Error::UnexpectedMessage(
                "heartbeat records are not processed".into(),
            )),
        }
    }

    /// View the fragment as a protected payload awaiting decryption.
    pub fn encrypted(&self) -> Encrypted {
        Encrypted::new(self.header.content_type, self.fragment.clone())
    }
}

/// `read_exact` variant that reports byte counts on a short read.
fn read_exact_counting<R: io::Read>(
    reader: &mut R,
    buf: &mut [u8],
    context: &'static str,
) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::Truncated {
                    context,
                    needed: buf.len(),
                    available: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
