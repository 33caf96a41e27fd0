//! Segregated Witness decoding and size accounting

use crate::compact_size::compact_size_len;
use crate::constants::{
    BLOCK_HEADER_SIZE, SERIALIZE_TRANSACTION_NO_WITNESS, WITNESS_SCALE_FACTOR,
};
use crate::cursor::Cursor;
use crate::decode::{decode_vec, Decodable};
use crate::error::Result;
use crate::types::*;

/// Whether streams at this protocol version may carry witness data.
pub fn allows_witness(version: u32) -> bool {
    version & SERIALIZE_TRANSACTION_NO_WITNESS == 0
}

impl Decodable for Witness {
    const MIN_ENCODED_SIZE: usize = 1;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        decode_vec::<ByteString>(cursor)
    }
}

/// Read one witness stack per input, in input order.
pub(crate) fn decode_witnesses(cursor: &mut Cursor<'_>, input_count: usize) -> Result<Vec<Witness>> {
    let mut witnesses = Vec::with_capacity(input_count);
    for _ in 0..input_count {
        witnesses.push(Witness::decode(cursor)?);
    }
    Ok(witnesses)
}

fn bytes_len(bytes: &[u8]) -> usize {
    compact_size_len(bytes.len() as u64) + bytes.len()
}

/// Size of the transaction without marker, flag and witness stacks
/// (the "stripped" size).
pub fn calculate_base_size(tx: &Transaction) -> usize {
    let inputs: usize = tx
        .inputs
        .iter()
        .map(|i| 32 + 4 + bytes_len(&i.script_sig) + 4)
        .sum();
    let outputs: usize = tx
        .outputs
        .iter()
        .map(|o| 8 + bytes_len(&o.script_pubkey))
        .sum();

    4 // version
        + compact_size_len(tx.inputs.len() as u64)
        + inputs
        + compact_size_len(tx.outputs.len() as u64)
        + outputs
        + 4 // lock_time
}

/// Size of the witness section including marker and flag; zero for legacy transactions.
pub fn calculate_witness_size(tx: &Transaction) -> usize {
    if !tx.has_witness {
        return 0;
    }
    let stacks: usize = tx
        .witnesses
        .iter()
        .map(|stack| {
            compact_size_len(stack.len() as u64)
                + stack.iter().map(Vec::as_slice).map(bytes_len).sum::<usize>()
        })
        .sum();
    2 + stacks
}

/// Size of the transaction as serialized with witness data.
///
/// Equals the number of bytes decoded when the input used minimal
/// CompactSize prefixes.
pub fn calculate_total_size(tx: &Transaction) -> usize {
    calculate_base_size(tx) + calculate_witness_size(tx)
}

/// Calculate transaction weight
/// Weight(tx) = 3 × |Serialize(tx ∖ witness)| + |Serialize(tx)|
pub fn calculate_transaction_weight(tx: &Transaction) -> usize {
    (WITNESS_SCALE_FACTOR - 1) * calculate_base_size(tx) + calculate_total_size(tx)
}

/// Virtual size: weight / 4, rounded up.
pub fn calculate_virtual_size(tx: &Transaction) -> usize {
    calculate_transaction_weight(tx).div_ceil(WITNESS_SCALE_FACTOR)
}

/// Stripped size of a block: header, transaction count and base transactions.
pub fn calculate_block_base_size(block: &Block) -> usize {
    BLOCK_HEADER_SIZE
        + compact_size_len(block.transactions.len() as u64)
        + block.transactions.iter().map(calculate_base_size).sum::<usize>()
}

/// Full serialized size of a block including witness data.
pub fn calculate_block_total_size(block: &Block) -> usize {
    calculate_block_base_size(block)
        + block
            .transactions
            .iter()
            .map(calculate_witness_size)
            .sum::<usize>()
}

/// Calculate block weight
/// Weight(b) = 3 × StrippedSize(b) + TotalSize(b)
pub fn calculate_block_weight(block: &Block) -> usize {
    (WITNESS_SCALE_FACTOR - 1) * calculate_block_base_size(block) + calculate_block_total_size(block)
}
