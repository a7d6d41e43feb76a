//! Bit-level arithmetic on integer-encoded configurations.
//!
//! A configuration is a `u64` where bit `k` (1-indexed) records whether
//! site `k` is in the Rydberg (excited) state. Two configurations are
//! bit-flip-adjacent at site `k` when they differ in exactly that bit;
//! the off-diagonal structure of the Hamiltonian lives entirely on such
//! pairs.

use super::error::RydbergError;

/// Reads bit `k` (1-indexed) of `config`, returning 0 or 1.
///
/// Precondition: `1 <= k <= 64`. Checked with a debug assertion; the
/// builders only ever pass site indices in `1..=nsites`.
#[inline]
pub fn readbit(config: u64, k: usize) -> u64 {
    debug_assert!((1..=64).contains(&k), "site index {k} out of range");
    (config >> (k - 1)) & 1
}

/// Toggles every bit of `config` that is set in `mask`.
#[inline]
pub fn flip(config: u64, mask: u64) -> u64 {
    config ^ mask
}

/// Returns the 1-indexed position of the single set bit of `mask`.
///
/// The callers obtain `mask` as the XOR of two configurations known to
/// be Hamming-distance 1, so anything other than a power of two means
/// the stored sparsity pattern disagrees with the subspace and must not
/// be silently accepted.
#[inline]
pub fn log2i(mask: u64) -> Result<usize, RydbergError> {
    if mask == 0 || !mask.is_power_of_two() {
        return Err(RydbergError::InvalidMask { mask });
    }
    Ok(mask.trailing_zeros() as usize + 1)
}
