//! # Block-Decode
//!
//! Decoder for the Bitcoin block consensus encoding.
//!
//! This crate turns a contiguous byte buffer into a structured [`Block`]: an
//! 80-byte header followed by its transactions, each with inputs, outputs,
//! optional witness stacks and lock time. It performs no validation of any
//! kind; the decoded block is a faithful image of the bytes.
//!
//! ## Architecture
//!
//! The decoder is layered, leaves first:
//! - [`cursor`]: bounds-checked forward read head carrying the protocol version
//! - [`decode`]: little-endian primitives, byte strings and vectors
//! - [`compact_size`]: variable-length integer prefixes
//! - [`transaction`] and [`segwit`]: legacy and witness transaction layouts
//! - [`block`]: header and transaction list
//!
//! The [`hex_input`], [`config`] and [`bench`] modules back the
//! `block-decode-bench` binary that times parsing of a block hex dump.
//! [`block_json`] reads the same block as Bitcoin Core's `getblock` JSON so
//! the two renderings can be timed side by side.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Decoding reads only the input buffer and allocates only its output
//! 2. **First Error Wins**: Every decoder returns the first failure unchanged
//! 3. **Bounded Allocation**: No capacity is reserved from an unchecked length prefix
//! 4. **Owned Output**: Scripts and witness elements are copied out of the buffer
//!
//! ## Usage
//!
//! ```rust
//! use block_decode::BlockDecoder;
//!
//! let decoder = BlockDecoder::new();
//! let mut raw = vec![0u8; 80];
//! raw[0] = 1; // version
//! raw.push(0); // no transactions
//!
//! let block = decoder.decode_block(&raw).unwrap();
//! assert_eq!(block.header.version, 1);
//! assert!(block.transactions.is_empty());
//! ```

pub mod types;
pub mod constants;
pub mod error;
pub mod cursor;
pub mod decode;
pub mod compact_size;
pub mod transaction;
pub mod segwit;
pub mod block;
pub mod hex_input;
pub mod block_json;
pub mod config;
pub mod bench;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use cursor::Cursor;
pub use decode::Decodable;
pub use error::{DecodeError, ErrorKind, Result};

/// Block decoder bound to a protocol version
///
/// # Examples
///
/// ```
/// use block_decode::{BlockDecoder, ErrorKind};
///
/// let decoder = BlockDecoder::new();
///
/// // A header cut short is reported, never padded
/// let err = decoder.decode_block(&[0u8; 40]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDecoder {
    version: u32,
}

impl Default for BlockDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDecoder {
    /// Create a decoder for the current protocol version
    ///
    /// # Examples
    ///
    /// ```
    /// use block_decode::{BlockDecoder, PROTOCOL_VERSION};
    ///
    /// let decoder = BlockDecoder::new();
    /// assert_eq!(decoder.version(), PROTOCOL_VERSION);
    /// ```
    pub fn new() -> Self {
        Self::with_version(PROTOCOL_VERSION)
    }

    /// Create a decoder for an explicit protocol version
    ///
    /// # Examples
    ///
    /// ```
    /// use block_decode::{BlockDecoder, PROTOCOL_VERSION, SERIALIZE_TRANSACTION_NO_WITNESS};
    ///
    /// // Witness markers are not recognized on a no-witness stream
    /// let decoder = BlockDecoder::with_version(PROTOCOL_VERSION | SERIALIZE_TRANSACTION_NO_WITNESS);
    /// assert!(!block_decode::segwit::allows_witness(decoder.version()));
    /// ```
    pub fn with_version(version: u32) -> Self {
        Self { version }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Decode a block, returning it together with the number of bytes consumed
    pub fn decode_block_partial(&self, data: &[u8]) -> Result<(Block, usize)> {
        block::deserialize_block_with_version(data, self.version)
    }

    /// Decode a block from the start of `data`
    ///
    /// Bytes after the last transaction are ignored; use
    /// [`decode_block_partial`](Self::decode_block_partial) to see how many
    /// bytes were used.
    pub fn decode_block(&self, data: &[u8]) -> Result<Block> {
        self.decode_block_partial(data).map(|(block, _)| block)
    }

    /// Decode only the 80-byte block header
    pub fn decode_header(&self, data: &[u8]) -> Result<BlockHeader> {
        BlockHeader::decode(&mut Cursor::with_version(data, self.version))
    }

    /// Decode a single transaction
    ///
    /// # Examples
    ///
    /// ```
    /// use block_decode::BlockDecoder;
    ///
    /// let decoder = BlockDecoder::new();
    /// let raw: [u8; 12] = [
    ///     1, 0, 0, 0, // version
    ///     0, 1,       // witness marker and flag
    ///     0,          // no inputs
    ///     0,          // no outputs
    ///     0, 0, 0, 0, // lock time
    /// ];
    /// let (tx, consumed) = decoder.decode_transaction(&raw).unwrap();
    /// assert!(tx.has_witness);
    /// assert_eq!(consumed, raw.len());
    /// ```
    pub fn decode_transaction(&self, data: &[u8]) -> Result<(Transaction, usize)> {
        transaction::deserialize_transaction_with_version(data, self.version)
    }

    /// Double SHA-256 of the raw header at the start of `data`
    pub fn block_hash(&self, data: &[u8]) -> Result<Hash> {
        block::block_hash(data)
    }
}
