//! Hex-to-byte conversion for on-disk block dumps
//!
//! Input is a run of ASCII hex digits in either case. The first character
//! outside `[0-9a-fA-F]` ends the input, which strips a trailing newline or
//! whitespace. An odd number of digits is an error.

use std::path::Path;

use tracing::debug;

use crate::error::{DecodeError, Result};

/// Convert the leading hex digits of `input` to bytes.
///
/// # Examples
///
/// ```
/// use block_decode::hex_input::decode_hex;
///
/// assert_eq!(decode_hex(b"00ffAB\n").unwrap(), vec![0x00, 0xff, 0xab]);
/// assert!(decode_hex(b"abc").is_err());
/// ```
pub fn decode_hex(input: &[u8]) -> Result<Vec<u8>> {
    let digits = input.iter().take_while(|b| b.is_ascii_hexdigit()).count();

    // Only digits reach the decoder, so an odd count is its one failure
    ::hex::decode(&input[..digits]).map_err(|_| DecodeError::MalformedHex {
        position: digits,
        reason: "odd number of hex digits",
    })
}

/// Read a hex file into memory without converting it.
pub fn read_hex_file(path: &Path) -> Result<Vec<u8>> {
    let contents = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read hex file");
    Ok(contents)
}
