//! Primitive wire codec.
//!
//! Fixed-width big-endian integers and length-prefixed opaque vectors,
//! the building blocks every message codec in this crate shares. All
//! getters check available bytes before reading and fail with a
//! [`Error::Truncated`] naming what was being read. Declared lengths are
//! never trusted past the end of the buffer.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Error, Result};

/// Fail unless `buf` holds at least `needed` bytes for `context`.
pub fn need(buf: &[u8], needed: usize, context: &'static str) -> Result<()> {
    if buf.len() < needed {
        return Err(Error::Truncated {
            context,
            needed,
            available: buf.len(),
        });
    }
    Ok(())
}

/// Read a u8.
pub fn get_u8(buf: &mut &[u8], context: &'static str) -> Result<u8> {
    need(buf, 1, context)?;
    Ok(buf.get_u8())
}

/// Read a big-endian u16.
pub fn get_u16(buf: &mut &[u8], context: &'static str) -> Result<u16> {
    need(buf, 2, context)?;
    Ok(buf.get_u16())
}

/// Read a big-endian u24 into a usize.
pub fn get_u24(buf: &mut &[u8], context: &'static str) -> Result<usize> {
    need(buf, 3, context)?;
    Ok(buf.get_uint(3) as usize)
}

/// Read a big-endian u64.
pub fn get_u64(buf: &mut &[u8], context: &'static str) -> Result<u64> {
    need(buf, 8, context)?;
    Ok(buf.get_u64())
}

/// Read exactly `len` opaque bytes.
pub fn get_bytes(buf: &mut &[u8], len: usize, context: &'static str) -> Result<Vec<u8>> {
    need(buf, len, context)?;
    let out = buf[..len].to_vec();
    buf.advance(len);
    Ok(out)
}

/// Read a u8-length-prefixed opaque vector.
pub fn get_vec8(buf: &mut &[u8], context: &'static str) -> Result<Vec<u8>> {
    let len = get_u8(buf, context)? as usize;
    get_bytes(buf, len, context)
}

/// Read a u16-length-prefixed opaque vector.
pub fn get_vec16(buf: &mut &[u8], context: &'static str) -> Result<Vec<u8>> {
    let len = get_u16(buf, context)? as usize;
    get_bytes(buf, len, context)
}

/// Read a u24-length-prefixed opaque vector.
pub fn get_vec24(buf: &mut &[u8], context: &'static str) -> Result<Vec<u8>> {
    let len = get_u24(buf, context)?;
    get_bytes(buf, len, context)
}

/// Write a big-endian u24. Fails if the value does not fit.
pub fn put_u24(buf: &mut BytesMut, value: usize, context: &'static str) -> Result<()> {
    if value > 0x00FF_FFFF {
        return Err(Error::DecodeError(format!(
            "{} length {} exceeds u24",
            context, value
        )));
    }
    buf.put_uint(value as u64, 3);
    Ok(())
}

/// Write a u8-length-prefixed opaque vector.
pub fn put_vec8(buf: &mut BytesMut, data: &[u8], context: &'static str) -> Result<()> {
    if data.len() > u8::MAX as usize {
        return Err(Error::DecodeError(format!(
            "{} length {} exceeds u8",
            context,
            data.len()
        )));
    }
    buf.put_u8(data.len() as u8);
    buf.put_slice(data);
    Ok(())
}

/// Write a u16-length-prefixed opaque vector.
pub fn put_vec16(buf: &mut BytesMut, data: &[u8], context: &'static str) -> Result<()> {
    if data.len() > u16::MAX as usize {
        return Err(Error::DecodeError(format!(
            "{} length {} exceeds u16",
            context,
            data.len()
        )));
    }
    buf.put_u16(data.len() as u16);
    buf.put_slice(data);
    Ok(())
}

/// Write a u24-length-prefixed opaque vector.
pub fn put_vec24(buf: &mut BytesMut, data: &[u8], context: &'static str) -> Result<()> {
    put_u24(buf, data.len(), context)?;
    buf.put_slice(data);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u24_round_trip() {
        let mut buf = BytesMut::new();
        put_u24(&mut buf, 0x01_02_03, "test").unwrap();
        assert_eq!(&buf[..], &[0x01, 0x02, 0x03]);

        let mut slice = &buf[..];
        assert_eq!(get_u24(&mut slice, "test").unwrap(), 0x01_02_03);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_u24_overflow() {
        let mut buf = BytesMut::new();
        assert!(put_u24(&mut buf, 0x0100_0000, "test").is_err());
    }

    #[test]
    fn test_vec16_round_trip() {
        let mut buf = BytesMut::new();
        put_vec16(&mut buf, &[0xAA, 0xBB], "test").unwrap();
        assert_eq!(&buf[..], &[0x00, 0x02, 0xAA, 0xBB]);

        let mut slice = &buf[..];
        assert_eq!(get_vec16(&mut slice, "test").unwrap(), vec![0xAA, 0xBB]);
    }

    #[test]
    fn test_truncated_reports_context_and_counts() {
        let mut slice: &[u8] = &[0x00];
        let err = get_u16(&mut slice, "suite code").unwrap_err();
        assert_eq!(
            err,
            Error::Truncated {
                context: "suite code",
                needed: 2,
                available: 1
            }
        );
    }

    #[test]
    fn test_vec8_declared_length_past_end() {
        // Declares 5 bytes, provides 2.
        let mut slice: &[u8] = &[0x05, 0x01, 0x02];
        assert!(get_vec8(&mut slice, "session id").is_err());
    }
}
