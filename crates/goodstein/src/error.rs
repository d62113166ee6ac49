//! Construction errors.

use thiserror::Error;

/// Why a number could not be decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// The base is 0 or 1, which has no positional notation.
    #[error("base must be at least 2, got {base}")]
    BaseTooSmall {
        /// The rejected base.
        base: i64,
    },
    /// The base is beyond `i64::MAX`, leaving no room for base increments.
    #[error("base must be at most {}, got {base}", i64::MAX)]
    BaseTooLarge {
        /// The rejected base.
        base: u64,
    },
    /// The number to decompose is negative.
    #[error("n must be non negative, got {n}")]
    NegativeValue {
        /// The rejected value.
        n: i64,
    },
}
