//! Core Bitcoin types produced by the block decoder

use serde::{Deserialize, Serialize};

use crate::constants::{COINBASE_PREVOUT_INDEX, HASH_SIZE};

/// Hash type: 256-bit hash, stored in wire byte order
pub type Hash = [u8; HASH_SIZE];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Witness stack for a single input: 𝒲 = 𝕊*
pub type Witness = Vec<ByteString>;

/// Render a hash the way block explorers and RPCs print it (byte-reversed hex).
pub fn display_hash(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// OutPoint: 𝒪 = ℍ × ℕ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The sentinel outpoint spent by a coinbase input.
    pub fn null() -> Self {
        Self {
            txid: [0u8; HASH_SIZE],
            index: COINBASE_PREVOUT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.index == COINBASE_PREVOUT_INDEX && self.txid == [0u8; HASH_SIZE]
    }
}

/// Transaction Input: ℐ = 𝒪 × 𝕊 × ℕ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub previous_output: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
}

/// Transaction Output: 𝒯 = ℤ × 𝕊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Value in satoshis
    pub value: i64,
    pub script_pubkey: ByteString,
}

/// Transaction: 𝒯𝒳 = ℤ × ℐ* × 𝒯* × 𝒲* × ℕ
///
/// `witnesses` is aligned index-for-index with `inputs` when `has_witness`
/// is set, and empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub witnesses: Vec<Witness>,
    pub lock_time: u32,
    pub has_witness: bool,
}

impl Transaction {
    /// A transaction is a coinbase if it has exactly one input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    /// Sum of all output values in satoshis, `None` if it overflows.
    ///
    /// Values are taken as decoded and may be negative or out of money range.
    pub fn total_output_value(&self) -> Option<i64> {
        self.outputs
            .iter()
            .try_fold(0i64, |total, o| total.checked_add(o.value))
    }
}

/// Block Header: ℋ = ℤ × ℍ × ℍ × ℕ × ℕ × ℕ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub previous_block_hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Block: ℬ = ℋ × 𝒯𝒳*
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// The first transaction, if it is a coinbase.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.transactions.first().filter(|tx| tx.is_coinbase())
    }
}
