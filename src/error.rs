//! Error types for dynbitset.
//!
//! Every fallible `BitSet` operation reports a contract violation detected
//! before any mutation takes place, using the `thiserror` crate for the
//! error type.

use thiserror::Error;

/// The error type for `BitSet` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitSetError {
    /// Range bounds are out of order
    #[error("Invalid range: from {from} > to {to}")]
    InvalidRange {
        /// Start of the requested range
        from: usize,
        /// End of the requested range (exclusive)
        to: usize,
    },
}

/// A specialized `Result` type for `BitSet` operations.
pub type Result<T> = std::result::Result<T, BitSetError>;

/// Validate a `[from, to)` range.
#[inline]
pub(crate) fn check_range(from: usize, to: usize) -> Result<()> {
    if from > to {
        return Err(BitSetError::InvalidRange { from, to });
    }
    Ok(())
}
