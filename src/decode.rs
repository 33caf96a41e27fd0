//! Consensus decoding of primitive and variable-length wire values
//!
//! All integers are little-endian regardless of host byte order.

use crate::compact_size::decode_length;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::types::{ByteString, Hash};

/// Data which can be decoded from its consensus encoding.
pub trait Decodable: Sized {
    /// Smallest number of bytes any encoding of `Self` occupies.
    ///
    /// Bounds the capacity reserved for a vector of `Self` by what the
    /// remaining buffer could actually hold.
    const MIN_ENCODED_SIZE: usize;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self>;
}

macro_rules! impl_int_decodable {
    ($($ty:ty),*) => {
        $(
            impl Decodable for $ty {
                const MIN_ENCODED_SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
                    Ok(<$ty>::from_le_bytes(cursor.read_array()?))
                }
            }
        )*
    };
}

impl_int_decodable!(u8, u16, u32, i32, u64, i64);

impl Decodable for Hash {
    const MIN_ENCODED_SIZE: usize = 32;

    #[inline]
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        cursor.read_array()
    }
}

impl Decodable for ByteString {
    const MIN_ENCODED_SIZE: usize = 1;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        decode_bytes(cursor)
    }
}

/// Decode a CompactSize-prefixed byte string into an owned copy.
pub fn decode_bytes(cursor: &mut Cursor<'_>) -> Result<ByteString> {
    let len = decode_length(cursor)?;
    Ok(cursor.read_exact(len)?.to_vec())
}

/// Decode a CompactSize-prefixed sequence of `T`.
///
/// The first element error is returned unchanged.
pub fn decode_vec<T: Decodable>(cursor: &mut Cursor<'_>) -> Result<Vec<T>> {
    let count = decode_length(cursor)?;
    let fits = cursor.remaining() / T::MIN_ENCODED_SIZE.max(1);
    let mut items = Vec::with_capacity(count.min(fits));
    for _ in 0..count {
        items.push(T::decode(cursor)?);
    }
    Ok(items)
}
