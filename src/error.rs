//! Error types for checked entry decoding.

use crate::types::EntryKind;

/// Errors reported by the checked helpers on [`EntryReader`](crate::msgpack::EntryReader).
///
/// The plain pull API (`next_entry`, `peek`) never fails: it signals the end
/// of input by returning `None` and leaves truncation to the source flag.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A marker was read but its payload ran past the end of the input.
    #[error("truncated {kind} entry at offset {offset}")]
    Truncated { kind: EntryKind, offset: usize },

    /// Input ended while a value was still expected.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
