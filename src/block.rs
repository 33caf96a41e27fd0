//! Block wire-format decoding
//!
//! A block is an 80-byte header followed by a CompactSize-prefixed list of
//! transactions. Nothing here checks proof of work, the merkle root or any
//! other consensus rule: the result is a structural image of the bytes.

use bitcoin_hashes::{sha256d, Hash as BitcoinHash};

use crate::constants::{BLOCK_HEADER_SIZE, PROTOCOL_VERSION};
use crate::cursor::Cursor;
use crate::decode::{decode_vec, Decodable};
use crate::error::Result;
use crate::types::*;

impl Decodable for BlockHeader {
    const MIN_ENCODED_SIZE: usize = BLOCK_HEADER_SIZE;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(BlockHeader {
            version: i32::decode(cursor)?,
            previous_block_hash: Hash::decode(cursor)?,
            merkle_root: Hash::decode(cursor)?,
            time: u32::decode(cursor)?,
            bits: u32::decode(cursor)?,
            nonce: u32::decode(cursor)?,
        })
    }
}

impl Decodable for Block {
    const MIN_ENCODED_SIZE: usize = BLOCK_HEADER_SIZE + 1;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(Block {
            header: BlockHeader::decode(cursor)?,
            transactions: decode_vec(cursor)?,
        })
    }
}

/// Decode an 80-byte block header from the start of `data`.
pub fn deserialize_block_header(data: &[u8]) -> Result<BlockHeader> {
    BlockHeader::decode(&mut Cursor::new(data))
}

/// Decode a complete block from the start of `data`.
///
/// Returns the block and the number of bytes consumed. Bytes after the last
/// transaction are not an error here; callers that expect an exact fit
/// compare the count against `data.len()`.
pub fn deserialize_block(data: &[u8]) -> Result<(Block, usize)> {
    deserialize_block_with_version(data, PROTOCOL_VERSION)
}

/// Decode a complete block using an explicit protocol version.
pub fn deserialize_block_with_version(data: &[u8], version: u32) -> Result<(Block, usize)> {
    let mut cursor = Cursor::with_version(data, version);
    let block = Block::decode(&mut cursor)?;
    Ok((block, cursor.position()))
}

/// Block hash: SHA256(SHA256(header bytes)), in wire byte order.
///
/// Hashes the raw header at the start of `data` rather than a decoded
/// `BlockHeader`, so no re-encoding is involved.
pub fn block_hash(data: &[u8]) -> Result<Hash> {
    let header = Cursor::new(data).read_exact(BLOCK_HEADER_SIZE)?;
    Ok(sha256d::Hash::hash(header).into_inner())
}
