//! Bitcoin wire-format constants

/// Size of a serialized block header in bytes
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Size of a hash in bytes
pub const HASH_SIZE: usize = 32;

/// Protocol version assumed when the caller does not supply one
pub const PROTOCOL_VERSION: u32 = 70015;

/// Version bit that disables witness (de)serialization for a stream
pub const SERIALIZE_TRANSACTION_NO_WITNESS: u32 = 0x4000_0000;

/// First byte after the version field of a witness-form transaction
pub const WITNESS_MARKER: u8 = 0x00;

/// Only flag value currently defined after the witness marker
pub const WITNESS_FLAG: u8 = 0x01;

/// CompactSize prefix announcing a 2-byte value
pub const COMPACT_SIZE_U16: u8 = 0xfd;

/// CompactSize prefix announcing a 4-byte value
pub const COMPACT_SIZE_U32: u8 = 0xfe;

/// CompactSize prefix announcing an 8-byte value
pub const COMPACT_SIZE_U64: u8 = 0xff;

/// Output index used by the null outpoint of a coinbase input
pub const COINBASE_PREVOUT_INDEX: u32 = 0xffffffff;

/// Sequence number for final transaction
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Satoshis per BTC
pub const SATOSHIS_PER_BTC: i64 = 100_000_000;

/// Weight units per non-witness byte
pub const WITNESS_SCALE_FACTOR: usize = 4;
