//! Error types for block decoding

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Oversized length at offset {offset}: {length} exceeds limit of {limit} bytes")]
    OversizedLength {
        offset: usize,
        length: u64,
        limit: usize,
    },

    #[error("Malformed witness flag at offset {offset}: expected 0x01, got {flag:#04x}")]
    MalformedWitnessFlag { offset: usize, flag: u8 },

    #[error("Malformed hex at position {position}: {reason}")]
    MalformedHex {
        position: usize,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Kind of a [`DecodeError`], without its diagnostic payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedEof,
    OversizedLength,
    MalformedWitnessFlag,
    MalformedHex,
    Io,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            DecodeError::OversizedLength { .. } => ErrorKind::OversizedLength,
            DecodeError::MalformedWitnessFlag { .. } => ErrorKind::MalformedWitnessFlag,
            DecodeError::MalformedHex { .. } => ErrorKind::MalformedHex,
            DecodeError::Io(_) => ErrorKind::Io,
        }
    }

    /// Byte offset (or hex character position) where decoding failed.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::UnexpectedEof { offset, .. }
            | DecodeError::OversizedLength { offset, .. }
            | DecodeError::MalformedWitnessFlag { offset, .. } => Some(*offset),
            DecodeError::MalformedHex { position, .. } => Some(*position),
            DecodeError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
