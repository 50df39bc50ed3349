//! Error types for sequence input and result construction

use thiserror::Error;

/// Main error type for PairFinder operations.
///
/// The scan itself never fails; these errors come from turning text into a
/// sequence and from building a [`ResultPair`](crate::ResultPair) out of
/// untrusted indices.
#[derive(Error, Debug)]
pub enum PairFinderError {
    /// A sequence element is not a valid `i64`
    #[error("Invalid integer at position {position}: {token:?}")]
    InvalidInteger {
        /// The offending text
        token: String,
        /// Zero-based element position
        position: usize,
    },

    /// Two separators with nothing between them
    #[error("Empty element at position {position}")]
    EmptyToken {
        /// Zero-based element position
        position: usize,
    },

    /// An opening `[` without a closing `]`, or the reverse
    #[error("Unbalanced brackets in sequence")]
    UnbalancedBrackets,

    /// Index pair that violates `first < second`
    #[error("Invalid pair: first index {first} must be less than second index {second}")]
    InvalidPair {
        /// First index
        first: usize,
        /// Second index
        second: usize,
    },

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PairFinder operations
pub type Result<T> = std::result::Result<T, PairFinderError>;
