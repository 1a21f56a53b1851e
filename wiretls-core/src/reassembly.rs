//! Handshake message reassembly across record boundaries.
//!
//! A handshake message may be split over any number of records, down
//! to one byte per record, and a record may end in the middle of a
//! message header. [`HandshakeReassembler`] buffers handshake
//! fragments in arrival order and yields complete messages as soon as
//! their bytes are in.

use std::io;

use tracing::trace;

use crate::error::{Error, Result};
use crate::handshake::{Handshake, HandshakeBody, HandshakeHeader, HANDSHAKE_HEADER_SIZE};
use crate::protocol::ContentType;
use crate::record::Record;

/// Buffers handshake fragments and yields complete messages.
#[derive(Debug, Default)]
pub struct HandshakeReassembler {
    buffer: Vec<u8>,
}

impl HandshakeReassembler {
    /// Create an empty reassembler.
    pub fn new() -> Self {
        HandshakeReassembler { buffer: Vec::new() }
    }

    /// Feed the fragment of a handshake record.
    ///
    /// Records of any other content type are rejected; interleaving
    /// non-handshake records inside a fragmented message is a peer
    /// protocol violation.
    pub fn push_record(&mut self, record: &Record) -> Result<()> {
        if record.header.content_type != ContentType::Handshake {
            return Err(Error::UnexpectedMessage(format!(
                "expected handshake record, got {}",
                record.header.content_type.name()
            )));
        }
        self.push_bytes(&record.fragment);
        Ok(())
    }

    /// Feed raw handshake bytes.
    pub fn push_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
        trace!(
            fed = data.len(),
            buffered = self.buffer.len(),
            "handshake bytes buffered"
        );
    }

    /// Pop the next complete message, or `None` if more bytes are
    /// needed.
    pub fn next_handshake(&mut self) -> Result<Option<Handshake>> {
        if self.buffer.len() < HANDSHAKE_HEADER_SIZE {
            return Ok(None);
        }
        let mut slice = self.buffer.as_slice();
        let header = HandshakeHeader::decode(&mut slice)?;
        let total = HANDSHAKE_HEADER_SIZE + header.length;
        if self.buffer.len() < total {
            return Ok(None);
        }
        let body = HandshakeBody::decode(
            header.handshake_type,
            &self.buffer[HANDSHAKE_HEADER_SIZE..total],
        )?;
        self.buffer.drain(..total);
        trace!(
            handshake_type = header.handshake_type.name(),
            length = header.length,
            "handshake message reassembled"
        );
        Ok(Some(Handshake { header, body }))
    }

    /// Read records from a stream until one complete handshake
    /// message is available.
    pub fn read_handshake<R: io::Read>(&mut self, reader: &mut R) -> Result<Handshake> {
        loop {
            if let Some(message) = self.next_handshake()? {
                return Ok(message);
            }
            let record = Record::read_from(reader)?;
            self.push_record(&record)?;
        }
    }

    /// Bytes buffered but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Drop any buffered bytes.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handshake::{Finished, ServerHelloDone};
    use crate::protocol::{HandshakeType, ProtocolVersion};

    fn finished() -> Handshake {
        Handshake::new(HandshakeBody::Finished(Finished::new(vec![0x5A; 12])))
    }

    #[test]
    fn test_whole_message_at_once() {
        let msg = finished();
        let mut reassembler = HandshakeReassembler::new();
        reassembler.push_bytes(&msg.encode().unwrap());
        assert_eq!(reassembler.next_handshake().unwrap(), Some(msg));
        assert_eq!(reassembler.next_handshake().unwrap(), None);
        assert_eq!(reassembler.buffered(), 0);
    }

    #[test]
    fn test_one_byte_at_a_time() {
        let msg = finished();
        let wire = msg.encode().unwrap();
        let mut reassembler = HandshakeReassembler::new();
        for (i, byte) in wire.iter().enumerate() {
            assert_eq!(reassembler.next_handshake().unwrap(), None, "byte {}", i);
            reassembler.push_bytes(&[*byte]);
        }
        assert_eq!(reassembler.next_handshake().unwrap(), Some(msg));
    }

    #[test]
    fn test_split_inside_header() {
        let msg = finished();
        let wire = msg.encode().unwrap();
        let mut reassembler = HandshakeReassembler::new();
        reassembler.push_bytes(&wire[..2]);
        assert_eq!(reassembler.next_handshake().unwrap(), None);
        reassembler.push_bytes(&wire[2..]);
        assert_eq!(reassembler.next_handshake().unwrap(), Some(msg));
    }

    #[test]
    fn test_coalesced_messages_pop_in_order() {
        let first = Handshake::new(HandshakeBody::ServerHelloDone(ServerHelloDone::new()));
        let second = finished();
        let mut wire = first.encode().unwrap();
        wire.extend(second.encode().unwrap());

        let mut reassembler = HandshakeReassembler::new();
        reassembler.push_bytes(&wire);
        assert_eq!(
            reassembler.next_handshake().unwrap().unwrap().handshake_type(),
            HandshakeType::ServerHelloDone
        );
        assert_eq!(
            reassembler.next_handshake().unwrap().unwrap().handshake_type(),
            HandshakeType::Finished
        );
        assert_eq!(reassembler.next_handshake().unwrap(), None);
    }

    #[test]
    fn test_rejects_non_handshake_record() {
        let record = Record::new(
            ContentType::Alert,
            ProtocolVersion::Tls12,
            vec![0x01, 0x00],
        )
        .unwrap();
        let mut reassembler = HandshakeReassembler::new();
        assert!(reassembler.push_record(&record).is_err());
    }

    #[test]
    fn test_read_handshake_across_records() {
        let msg = finished();
        let wire = msg.encode().unwrap();
        let mut stream = Vec::new();
        for chunk in wire.chunks(3) {
            Record::new(ContentType::Handshake, ProtocolVersion::Tls12, chunk.to_vec())
                .unwrap()
                .write_to(&mut stream)
                .unwrap();
        }
        let mut cursor = io::Cursor::new(stream);
        let mut reassembler = HandshakeReassembler::new();
        assert_eq!(reassembler.read_handshake(&mut cursor).unwrap(), msg);
    }

    #[test]
    fn test_clear() {
        let mut reassembler = HandshakeReassembler::new();
        reassembler.push_bytes(&[0x14, 0x00]);
        assert_eq!(reassembler.buffered(), 2);
        reassembler.clear();
        assert_eq!(reassembler.buffered(), 0);
    }
}
