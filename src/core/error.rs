//! Error handling logic

use std::fmt;

/// Error types for subspace and Hamiltonian construction.
///
/// Every variant is a programmer-facing precondition or invariant
/// violation; none of them are transient conditions, so no operation in
/// this crate retries.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum RydbergError {
    /// A per-site parameter sequence whose length does not match the
    /// number of sites. Reported at the builder boundary, before any
    /// matrix write occurs.
    ParameterLength {
        /// Number of sites the builder operates on.
        expected: usize,
        /// Length of the offending parameter sequence.
        actual: usize,
    },

    /// `log2i` was handed a mask that is zero or has more than one bit
    /// set. The callers only ever pass the XOR of two configurations
    /// known to be Hamming-distance 1, so this indicates a sparsity
    /// pattern that no longer matches the subspace it was built from.
    InvalidMask {
        /// The malformed mask.
        mask: u64,
    },

    /// A destination matrix whose dimension does not match the subspace
    /// it is being filled from.
    DimensionMismatch {
        /// Subspace dimension.
        expected: usize,
        /// Dimension of the supplied matrix.
        actual: usize,
    },

    /// More sites than fit in a `u64` configuration word.
    TooManySites {
        /// Requested site count.
        sites: usize,
    },
}

impl fmt::Display for RydbergError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RydbergError::ParameterLength { expected, actual } => write!(
                f,
                "per-site parameter has length {actual}, expected {expected}"
            ),
            RydbergError::InvalidMask { mask } => write!(
                f,
                "mask {mask:#x} is not a single-bit mask; sparsity pattern and subspace disagree"
            ),
            RydbergError::DimensionMismatch { expected, actual } => write!(
                f,
                "matrix dimension {actual} does not match subspace dimension {expected}"
            ),
            RydbergError::TooManySites { sites } => {
                write!(f, "{sites} sites exceed the 64-bit configuration limit")
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for RydbergError {}
