//! Bitcoin CompactSize decoding
//!
//! CompactSize is the variable-length integer used for every length prefix in
//! the wire format. It occupies 1, 3, 5 or 9 bytes:
//! - value < 0xfd: single byte
//! - 0xfd prefix + 2 bytes (little-endian)
//! - 0xfe prefix + 4 bytes (little-endian)
//! - 0xff prefix + 8 bytes (little-endian)
//!
//! Decoding accepts non-minimal encodings (e.g. `0xfd 0x01 0x00` for 1).
//! An encoder must emit the minimal form.

use crate::constants::{COMPACT_SIZE_U16, COMPACT_SIZE_U32, COMPACT_SIZE_U64};
use crate::cursor::Cursor;
use crate::decode::Decodable;
use crate::error::{DecodeError, Result};

/// Decode a CompactSize value.
///
/// # Examples
///
/// ```
/// use block_decode::compact_size::decode_compact_size;
/// use block_decode::cursor::Cursor;
///
/// assert_eq!(decode_compact_size(&mut Cursor::new(&[252])).unwrap(), 252);
/// assert_eq!(decode_compact_size(&mut Cursor::new(&[0xfd, 253, 0])).unwrap(), 253);
/// assert_eq!(decode_compact_size(&mut Cursor::new(&[0xfd, 1, 0])).unwrap(), 1);
/// assert!(decode_compact_size(&mut Cursor::new(&[0xfe, 0, 0])).is_err());
/// ```
pub fn decode_compact_size(cursor: &mut Cursor<'_>) -> Result<u64> {
    let first = cursor.read_u8()?;
    let value = match first {
        COMPACT_SIZE_U16 => u16::decode(cursor)? as u64,
        COMPACT_SIZE_U32 => u32::decode(cursor)? as u64,
        COMPACT_SIZE_U64 => u64::decode(cursor)?,
        b => b as u64,
    };
    Ok(value)
}

/// Decode a CompactSize used as a length and reject values no buffer of
/// this size could satisfy.
///
/// The bound is the total buffer length, not the remaining bytes. A length
/// that fits the buffer but runs past its end surfaces as `UnexpectedEof`
/// from the read that comes up short. A buffer cut off inside a field whose
/// declared length exceeds the whole cut buffer reports `OversizedLength`.
pub fn decode_length(cursor: &mut Cursor<'_>) -> Result<usize> {
    let offset = cursor.position();
    let length = decode_compact_size(cursor)?;
    let limit = cursor.len();
    match usize::try_from(length) {
        Ok(n) if n <= limit => Ok(n),
        _ => Err(DecodeError::OversizedLength {
            offset,
            length,
            limit,
        }),
    }
}

/// Number of bytes the minimal CompactSize encoding of `value` occupies.
pub fn compact_size_len(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x10000..=0xffff_ffff => 5,
        _ => 9,
    }
}
