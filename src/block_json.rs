//! Bitcoin Core `getblock` JSON (verbosity 2)
//!
//! Parses the RPC rendering of a block so the benchmark can time it against
//! the binary decoder and tests can cross-check the two. Hashes are printed
//! in display order by the RPC and are stored here in wire order, like every
//! other [`Hash`] in the crate.

use serde::{de, Deserialize, Deserializer};

use crate::constants::{HASH_SIZE, SATOSHIS_PER_BTC};
use crate::types::{
    Block, BlockHeader, ByteString, Hash, OutPoint, Transaction, TransactionInput,
    TransactionOutput, Witness,
};

/// Parse a verbosity-2 `getblock` result.
pub fn parse_block_json(json: &str) -> serde_json::Result<RpcBlock> {
    serde_json::from_str(json)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcBlock {
    #[serde(deserialize_with = "display_hash")]
    pub hash: Hash,
    pub confirmations: i64,
    pub size: usize,
    pub strippedsize: usize,
    pub weight: usize,
    pub height: u32,
    pub version: i32,
    #[serde(rename = "versionHex", deserialize_with = "hex_u32")]
    pub version_hex: u32,
    #[serde(deserialize_with = "display_hash")]
    pub merkleroot: Hash,
    #[serde(rename = "tx")]
    pub transactions: Vec<RpcTransaction>,
    pub time: u32,
    pub mediantime: u32,
    pub nonce: u32,
    #[serde(deserialize_with = "hex_u32")]
    pub bits: u32,
    pub difficulty: f64,
    #[serde(deserialize_with = "display_hash")]
    pub chainwork: Hash,
    #[serde(rename = "nTx")]
    pub n_tx: usize,
    #[serde(default, deserialize_with = "optional_display_hash")]
    pub previousblockhash: Option<Hash>,
    #[serde(default, deserialize_with = "optional_display_hash")]
    pub nextblockhash: Option<Hash>,
}

impl RpcBlock {
    /// The 80-byte header fields; genesis has no previous block and gets the zero hash.
    pub fn header(&self) -> BlockHeader {
        BlockHeader {
            version: self.version,
            previous_block_hash: self.previousblockhash.unwrap_or([0; HASH_SIZE]),
            merkle_root: self.merkleroot,
            time: self.time,
            bits: self.bits,
            nonce: self.nonce,
        }
    }

    /// Rebuild the block from the structured fields, ignoring the raw `hex` of each transaction.
    pub fn to_block(&self) -> Block {
        Block {
            header: self.header(),
            transactions: self.transactions.iter().map(RpcTransaction::to_transaction).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcTransaction {
    #[serde(deserialize_with = "hex_bytes")]
    pub hex: ByteString,
    #[serde(deserialize_with = "display_hash")]
    pub txid: Hash,
    /// Witness txid; equal to `txid` for legacy transactions
    #[serde(deserialize_with = "display_hash")]
    pub hash: Hash,
    pub size: usize,
    pub vsize: usize,
    pub weight: usize,
    pub version: i32,
    pub locktime: u32,
    pub vin: Vec<RpcInput>,
    pub vout: Vec<RpcOutput>,
}

impl RpcTransaction {
    /// A transaction carries witness data when any input lists a witness stack.
    pub fn to_transaction(&self) -> Transaction {
        let has_witness = self.vin.iter().any(|input| input.witness().is_some());
        let witnesses = if has_witness {
            self.vin
                .iter()
                .map(|input| input.witness().cloned().unwrap_or_default())
                .collect()
        } else {
            Vec::new()
        };

        Transaction {
            version: self.version,
            inputs: self.vin.iter().map(RpcInput::to_input).collect(),
            outputs: self.vout.iter().map(RpcOutput::to_output).collect(),
            witnesses,
            lock_time: self.locktime,
            has_witness,
        }
    }
}

/// A `vin` entry: coinbase inputs carry the raw script under `coinbase`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RpcInput {
    Coinbase {
        #[serde(deserialize_with = "hex_bytes")]
        coinbase: ByteString,
        sequence: u32,
        #[serde(default, deserialize_with = "optional_witness")]
        txinwitness: Option<Witness>,
    },
    Spend {
        #[serde(deserialize_with = "display_hash")]
        txid: Hash,
        vout: u32,
        #[serde(rename = "scriptSig")]
        script_sig: RpcScript,
        sequence: u32,
        #[serde(default, deserialize_with = "optional_witness")]
        txinwitness: Option<Witness>,
    },
}

impl RpcInput {
    pub fn witness(&self) -> Option<&Witness> {
        match self {
            RpcInput::Coinbase { txinwitness, .. } | RpcInput::Spend { txinwitness, .. } => {
                txinwitness.as_ref()
            }
        }
    }

    pub fn to_input(&self) -> TransactionInput {
        match self {
            RpcInput::Coinbase { coinbase, sequence, .. } => TransactionInput {
                previous_output: OutPoint::null(),
                script_sig: coinbase.clone(),
                sequence: *sequence,
            },
            RpcInput::Spend {
                txid,
                vout,
                script_sig,
                sequence,
                ..
            } => TransactionInput {
                previous_output: OutPoint {
                    txid: *txid,
                    index: *vout,
                },
                script_sig: script_sig.hex.clone(),
                sequence: *sequence,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcScript {
    pub asm: String,
    #[serde(deserialize_with = "hex_bytes")]
    pub hex: ByteString,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcOutput {
    /// Amount in satoshis, converted from the BTC number the RPC prints
    #[serde(deserialize_with = "btc_amount")]
    pub value: i64,
    pub n: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pubkey: RpcScriptPubKey,
}

impl RpcOutput {
    pub fn to_output(&self) -> TransactionOutput {
        TransactionOutput {
            value: self.value,
            script_pubkey: self.script_pubkey.hex.clone(),
        }
    }
}

/// `reqSigs` and `addresses` were dropped by later Core releases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcScriptPubKey {
    pub asm: String,
    #[serde(deserialize_with = "hex_bytes")]
    pub hex: ByteString,
    #[serde(rename = "reqSigs", default)]
    pub req_sigs: Option<u32>,
    #[serde(rename = "type")]
    pub script_type: String,
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
}

// ── Field helpers ──

fn hex_bytes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ByteString, D::Error> {
    let s = String::deserialize(deserializer)?;
    hex::decode(&s).map_err(de::Error::custom)
}

fn display_hash<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
    let s = String::deserialize(deserializer)?;
    let mut hash = [0u8; HASH_SIZE];
    hex::decode_to_slice(&s, &mut hash)
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&s), &"a 64-digit hex hash"))?;
    hash.reverse();
    Ok(hash)
}

fn optional_display_hash<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Hash>, D::Error> {
    display_hash(deserializer).map(Some)
}

/// `bits` and `versionHex` are 8 hex digits, most significant first.
fn hex_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let s = String::deserialize(deserializer)?;
    let mut bytes = [0u8; 4];
    hex::decode_to_slice(&s, &mut bytes)
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&s), &"8 hex digits"))?;
    Ok(u32::from_be_bytes(bytes))
}

fn optional_witness<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Witness>, D::Error> {
    let items = Vec::<String>::deserialize(deserializer)?;
    items
        .iter()
        .map(|item| hex::decode(item).map_err(de::Error::custom))
        .collect::<Result<Witness, _>>()
        .map(Some)
}

/// BTC amounts are printed with 8 decimals; rounding recovers the exact satoshi count.
fn btc_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let btc = f64::deserialize(deserializer)?;
    let satoshis = (btc * SATOSHIS_PER_BTC as f64).round();
    if !satoshis.is_finite() || satoshis.abs() >= i64::MAX as f64 {
        return Err(de::Error::invalid_value(
            de::Unexpected::Float(btc),
            &"a BTC amount representable in satoshis",
        ));
    }
    Ok(satoshis as i64)
}
