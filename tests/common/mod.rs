//! Shared test helpers for integration tests.
//!
//! Lays out wire bytes for blocks and transactions so tests can build inputs
//! without hand-counting offsets, plus a few published mainnet vectors.

#![allow(dead_code)]

use std::cmp::Ordering;

use bitcoin_hashes::{sha256d, Hash as _};
use block_decode::*;

/// Bitcoin genesis block, header followed by its single coinbase transaction.
pub const GENESIS_BLOCK_HEX: &str = concat!(
    "0100000000000000000000000000000000000000000000000000000000000000",
    "000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa",
    "4b1e5e4a29ab5f49ffff001d1dac2b7c01010000000100000000000000000000",
    "00000000000000000000000000000000000000000000ffffffff4d04ffff001d",
    "0104455468652054696d65732030332f4a616e2f32303039204368616e63656c",
    "6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f75742066",
    "6f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe554827",
    "1967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4",
    "f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000",
);

/// Genesis block hash as displayed by explorers.
pub const GENESIS_BLOCK_HASH: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

/// Coinbase of mainnet block 623,200 (witness form).
pub const COINBASE_623200_HEX: &str = "020000000001010000000000000000000000000000000000000000000000000000000000000000ffffffff4d0360820904ab2d7e5e322f537069646572506f6f6cfabe6d6d664b0f8173a95a4ac375a977f76bcfe417f01b90097c8cd6245774e00e2f0af9020000008df9e4830ec0434099eb0e0000000000ffffffff0396f8fb4c0000000017a9144f0dd555d6f74016b8c57b265b17615dc092fa76870000000000000000266a24aa21a9ed1a90d574bff31c8aaf87630560799d1d949f5d9c7a87722a831dcf9ebb24f3ed0000000000000000266a24b9e11b6d93c98d94ff4693be57b5d99f1f4febb5dd1e867c4ed081c70059fd97f3c5e8df0120000000000000000000000000000000000000000000000000000000000000000000000000";

/// A legacy P2PKH spend from mainnet block 623,200.
pub const LEGACY_623200_HEX: &str = "02000000014d8004262a6686f9daa8935f68ee6bfc9363b4e162b8696e5e891af9f77a2947000000006b483045022100d957a36572fcf69714ca4f5ef014959a9945b59c416e30ba1904e9e18d9db848022008d7aab903ade3b64036d3e2513f5708b2589762c822f68e8f54c3398a91c3d7012103a0c53fcc4704ba78331a896c3bd684328b44890b25f91cfb853ab0bb301c7875ffffffff0490350f00000000001976a914b0f90d990d7c41d95128d6f2f74384e5514b05e788ac51281d00000000001976a9142ab4e140a02e677a388e5f54798445398d7ebf6188ac3df445160000000017a914015bd7fecbd9d1e2ae5eb595c4de144a5679f4c1875f671509000000001976a91443849383122ebb8a28268a89700c9f723663b5b888ac00000000";

/// `getblock <genesis> 2` as Bitcoin Core printed it while the tip was at 623,200.
pub const GENESIS_BLOCK_JSON: &str = r#"{
  "hash": "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
  "confirmations": 623201,
  "strippedsize": 285,
  "size": 285,
  "weight": 1140,
  "height": 0,
  "version": 1,
  "versionHex": "00000001",
  "merkleroot": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
  "tx": [
    {
      "txid": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
      "hash": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
      "version": 1,
      "size": 204,
      "vsize": 204,
      "weight": 816,
      "locktime": 0,
      "vin": [
        {
          "coinbase": "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73",
          "sequence": 4294967295
        }
      ],
      "vout": [
        {
          "value": 50.00000000,
          "n": 0,
          "scriptPubKey": {
            "asm": "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f OP_CHECKSIG",
            "hex": "4104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac",
            "reqSigs": 1,
            "type": "pubkey",
            "addresses": [
              "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"
            ]
          }
        }
      ],
      "hex": "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000"
    }
  ],
  "time": 1231006505,
  "mediantime": 1231006505,
  "nonce": 2083236893,
  "bits": "1d00ffff",
  "difficulty": 1,
  "chainwork": "0000000000000000000000000000000000000000000000000000000100010001",
  "nTx": 1,
  "nextblockhash": "00000000839a8e6886ab5951d76f411475428afc90947ee320161bbf18eb6048"
}"#;

// ── Wire layout ──

/// Append the minimal CompactSize encoding of `n`.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x10000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

pub fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

pub fn header_bytes(header: &BlockHeader) -> Vec<u8> {
    let mut out = Vec::with_capacity(80);
    out.extend_from_slice(&header.version.to_le_bytes());
    out.extend_from_slice(&header.previous_block_hash);
    out.extend_from_slice(&header.merkle_root);
    out.extend_from_slice(&header.time.to_le_bytes());
    out.extend_from_slice(&header.bits.to_le_bytes());
    out.extend_from_slice(&header.nonce.to_le_bytes());
    out
}

pub fn transaction_bytes(tx: &Transaction) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tx.version.to_le_bytes());
    if tx.has_witness {
        out.extend_from_slice(&[0x00, 0x01]);
    }
    write_compact_size(&mut out, tx.inputs.len() as u64);
    for input in &tx.inputs {
        out.extend_from_slice(&input.previous_output.txid);
        out.extend_from_slice(&input.previous_output.index.to_le_bytes());
        write_bytes(&mut out, &input.script_sig);
        out.extend_from_slice(&input.sequence.to_le_bytes());
    }
    write_compact_size(&mut out, tx.outputs.len() as u64);
    for output in &tx.outputs {
        out.extend_from_slice(&output.value.to_le_bytes());
        write_bytes(&mut out, &output.script_pubkey);
    }
    if tx.has_witness {
        for stack in &tx.witnesses {
            write_compact_size(&mut out, stack.len() as u64);
            for element in stack {
                write_bytes(&mut out, element);
            }
        }
    }
    out.extend_from_slice(&tx.lock_time.to_le_bytes());
    out
}

pub fn block_bytes(block: &Block) -> Vec<u8> {
    let mut out = header_bytes(&block.header);
    write_compact_size(&mut out, block.transactions.len() as u64);
    for tx in &block.transactions {
        out.extend_from_slice(&transaction_bytes(tx));
    }
    out
}

// ── Chain checks ──

pub fn double_sha256(bytes: &[u8]) -> Hash {
    sha256d::Hash::hash(bytes).into_inner()
}

/// Txid: hash of the transaction laid out without its witness.
pub fn stripped_txid(tx: &Transaction) -> Hash {
    let mut stripped = tx.clone();
    stripped.has_witness = false;
    stripped.witnesses.clear();
    double_sha256(&transaction_bytes(&stripped))
}

/// Merkle root over txids, duplicating the last node of odd levels.
pub fn merkle_root(txids: &[Hash]) -> Option<Hash> {
    let mut level = txids.to_vec();
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            level.push(level[level.len() - 1]);
        }
        level = level
            .chunks(2)
            .map(|pair| {
                let mut node = [0u8; 64];
                node[..32].copy_from_slice(&pair[0]);
                node[32..].copy_from_slice(&pair[1]);
                double_sha256(&node)
            })
            .collect();
    }
    level.first().copied()
}

/// Expand compact `bits` into a 256-bit target, little-endian like a wire hash.
pub fn target_from_bits(bits: u32) -> Hash {
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;
    let mut target = [0u8; 32];
    if exponent <= 3 {
        let shifted = mantissa >> (8 * (3 - exponent));
        target[..4].copy_from_slice(&shifted.to_le_bytes());
    } else {
        for (i, byte) in mantissa.to_le_bytes()[..3].iter().enumerate() {
            if let Some(slot) = target.get_mut(exponent - 3 + i) {
                *slot = *byte;
            }
        }
    }
    target
}

/// Whether a wire-order block hash is at or below the target encoded in `bits`.
pub fn meets_target(hash: &Hash, bits: u32) -> bool {
    let target = target_from_bits(bits);
    hash.iter().rev().cmp(target.iter().rev()) != Ordering::Greater
}

/// Height pushed at the start of a coinbase script (BIP34).
pub fn bip34_height(coinbase: &Transaction) -> Option<u64> {
    let script = &coinbase.inputs.first()?.script_sig;
    let (&len, rest) = script.split_first()?;
    if len == 0 || len > 8 {
        return None;
    }
    let pushed = rest.get(..len as usize)?;
    Some(pushed.iter().rev().fold(0u64, |height, b| height << 8 | *b as u64))
}

// ── Fixtures ──

pub fn version_one_header() -> BlockHeader {
    BlockHeader {
        version: 1,
        previous_block_hash: [0; 32],
        merkle_root: [0; 32],
        time: 0,
        bits: 0,
        nonce: 0,
    }
}

/// Legacy coinbase paying 50 BTC to an empty script.
pub fn coinbase_transaction() -> Transaction {
    Transaction {
        version: 1,
        inputs: vec![TransactionInput {
            previous_output: OutPoint::null(),
            script_sig: vec![],
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TransactionOutput {
            value: 50 * SATOSHIS_PER_BTC,
            script_pubkey: vec![],
        }],
        witnesses: vec![],
        lock_time: 0,
        has_witness: false,
    }
}

/// Version 2 witness spend with a 33-byte and an empty stack element.
pub fn witness_transaction() -> Transaction {
    Transaction {
        version: 2,
        inputs: vec![TransactionInput {
            previous_output: OutPoint { txid: [0xab; 32], index: 1 },
            script_sig: vec![],
            sequence: 0xfffffffe,
        }],
        outputs: vec![TransactionOutput {
            value: 1000,
            script_pubkey: vec![],
        }],
        witnesses: vec![vec![vec![0x02; 33], vec![]]],
        lock_time: 0,
        has_witness: true,
    }
}

pub fn coinbase_only_block() -> Block {
    Block {
        header: version_one_header(),
        transactions: vec![coinbase_transaction()],
    }
}

pub fn from_hex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid test vector")
}
