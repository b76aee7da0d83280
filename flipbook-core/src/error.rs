//! Error types for flipbook operations

use thiserror::Error;

/// Errors that can occur while editing a frame store or running the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Frame name must contain at least one character
    #[error("Frame name cannot be empty")]
    EmptyName,

    /// Frame path must contain at least one character
    #[error("Frame path cannot be empty")]
    EmptyPath,

    /// Text fields are NUL-terminated on disk and cannot carry interior NULs
    #[error("Frame {0} contains an interior NUL byte")]
    EmbeddedNul(&'static str),

    /// No frame with the requested name exists in the store
    #[error("No frame named {0:?} in the store")]
    FrameNotFound(String),

    /// 1-based position outside the valid range for the operation
    #[error("Position {given} out of range 1..={max}")]
    PositionOutOfRange {
        /// The position the caller asked for.
        given: usize,
        /// The largest position valid for the operation.
        max: usize,
    },

    /// A field's declared length exceeds the format maximum
    #[error("Field length {0} exceeds maximum {1}")]
    FieldTooLarge(u64, u64),

    /// Input ended before a record's declared contents
    #[error("Truncated record: expected {expected} more bytes, got {actual}")]
    TruncatedRecord {
        /// The number of bytes the record still required.
        expected: usize,
        /// The number of bytes actually remaining.
        actual: usize,
    },

    /// A record violated the format in a way other than ending early
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// IO error during save or load
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FrameError {
    fn from(err: std::io::Error) -> Self {
        FrameError::Io(err.to_string())
    }
}
