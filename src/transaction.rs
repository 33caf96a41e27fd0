//! Transaction wire-format decoding
//!
//! Two layouts share the same leading version field:
//! - legacy: version ‖ inputs ‖ outputs ‖ lock_time
//! - witness: version ‖ 0x00 ‖ 0x01 ‖ inputs ‖ outputs ‖ witnesses ‖ lock_time
//!
//! The byte after the version selects the layout. In the legacy layout that
//! byte is the input-count prefix, so a `0x00` there is always read as the
//! witness marker when the stream's protocol version permits witness data.

use crate::constants::{WITNESS_FLAG, WITNESS_MARKER};
use crate::cursor::Cursor;
use crate::decode::{decode_bytes, decode_vec, Decodable};
use crate::error::{DecodeError, Result};
use crate::segwit::{allows_witness, decode_witnesses};
use crate::types::*;

impl Decodable for OutPoint {
    const MIN_ENCODED_SIZE: usize = 32 + 4;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(OutPoint {
            txid: Hash::decode(cursor)?,
            index: u32::decode(cursor)?,
        })
    }
}

impl Decodable for TransactionInput {
    // OutPoint + empty script prefix + sequence
    const MIN_ENCODED_SIZE: usize = OutPoint::MIN_ENCODED_SIZE + 1 + 4;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(TransactionInput {
            previous_output: OutPoint::decode(cursor)?,
            script_sig: decode_bytes(cursor)?,
            sequence: u32::decode(cursor)?,
        })
    }
}

impl Decodable for TransactionOutput {
    const MIN_ENCODED_SIZE: usize = 8 + 1;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(TransactionOutput {
            value: i64::decode(cursor)?,
            script_pubkey: decode_bytes(cursor)?,
        })
    }
}

impl Decodable for Transaction {
    // version + two empty vector prefixes + lock_time
    const MIN_ENCODED_SIZE: usize = 4 + 1 + 1 + 4;

    /// DecodeTransaction: 𝔹* → 𝒯𝒳
    ///
    /// 1. Read version
    /// 2. If the next byte is 0x00 and the protocol version permits witness
    ///    data: consume marker, require flag = 0x01, read inputs, outputs and
    ///    one witness stack per input
    /// 3. Otherwise read inputs and outputs with no witness data
    /// 4. Read lock_time
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let version = i32::decode(cursor)?;

        let has_witness =
            allows_witness(cursor.version()) && cursor.peek_u8()? == WITNESS_MARKER;

        let (inputs, outputs, witnesses) = if has_witness {
            cursor.read_u8()?;
            let flag_offset = cursor.position();
            let flag = cursor.read_u8()?;
            if flag != WITNESS_FLAG {
                return Err(DecodeError::MalformedWitnessFlag {
                    offset: flag_offset,
                    flag,
                });
            }

            let inputs: Vec<TransactionInput> = decode_vec(cursor)?;
            let outputs = decode_vec(cursor)?;
            let witnesses = decode_witnesses(cursor, inputs.len())?;
            (inputs, outputs, witnesses)
        } else {
            (decode_vec(cursor)?, decode_vec(cursor)?, Vec::new())
        };

        Ok(Transaction {
            version,
            inputs,
            outputs,
            witnesses,
            lock_time: u32::decode(cursor)?,
            has_witness,
        })
    }
}

/// Decode a single transaction from the start of `data`.
///
/// Returns the transaction and the number of bytes it occupied.
pub fn deserialize_transaction(data: &[u8]) -> Result<(Transaction, usize)> {
    deserialize_transaction_with_version(data, crate::constants::PROTOCOL_VERSION)
}

/// Decode a single transaction using an explicit protocol version.
pub fn deserialize_transaction_with_version(
    data: &[u8],
    version: u32,
) -> Result<(Transaction, usize)> {
    let mut cursor = Cursor::with_version(data, version);
    let tx = Transaction::decode(&mut cursor)?;
    Ok((tx, cursor.position()))
}
