//! Error types for the edit buffer.
//!
//! Coordinates are never an error here: out-of-range lines, offsets and
//! columns are clamped by the operation that receives them. The only failures
//! are lifecycle and reference problems.

use std::fmt;

/// Result type alias for edit buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for edit buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The buffer was destroyed; it rejects every further call.
    Destroyed,
    /// A registry id that was never handed out.
    UnknownBuffer { index: u32 },
    /// An exported storage reference outlived a mutation of its buffer.
    StaleReference { expected: u64, actual: u64 },
    /// Unrecognized width method name.
    InvalidWidthMethod(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destroyed => write!(f, "EditBuffer is destroyed"),
            Self::UnknownBuffer { index } => write!(f, "no edit buffer at slot {index}"),
            Self::StaleReference { expected, actual } => write!(
                f,
                "stale storage reference: taken at revision {expected}, buffer is at revision {actual}"
            ),
            Self::InvalidWidthMethod(name) => {
                write!(f, "invalid width method: {name} (expected \"wcwidth\" or \"unicode\")")
            }
        }
    }
}

impl std::error::Error for Error {}
