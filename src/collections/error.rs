use thiserror::Error;

/// Argument errors reported by `copy_to`.
///
/// Every check runs before the first element is written, so on error the
/// destination is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyToError {
    /// No destination buffer was supplied.
    #[error("destination is absent")]
    NullDestination,

    /// The start index is below zero.
    #[error("start index {index} is negative")]
    NegativeIndex { index: i128 },

    /// The start index is not representable as a slice position.
    #[error("start index {index} is out of range")]
    IndexOutOfRange { index: u128 },

    /// The destination cannot hold every element from `start` onward.
    #[error("destination of length {available} cannot hold {required} elements starting at {start}")]
    InsufficientSpace {
        start: usize,
        required: usize,
        available: usize,
    },
}
