// src/matrix/mod.rs

//! Hamiltonian matrix builders over a constrained subspace.
//!
//! Two storage layouts share the same placement rules:
//! - [`dense`] fills a `nalgebra::DMatrix<Complex<f64>>` from scratch,
//! - [`sparse`] builds a compressed-sparse-column pattern once and then
//!   rewrites only the numeric values on every parameter change, which
//!   is what a time-evolution loop needs at each step.
//!
//! Placement rules (row `i` holds configuration `lhs = subspace[i]`):
//! - diagonal `(i,i)`: `Σ_k ±Δ_k`, minus when site `k` is excited in
//!   `lhs`, plus when it is in the ground state;
//! - off-diagonal `(i,j)` with `subspace[j] = flip(lhs, site k)`:
//!   `Ω_k·e^{+iϕ_k}` when the flip creates the excitation (bit `k` of
//!   `lhs` is 0), `Ω_k·e^{-iϕ_k}` when it removes it.
//!
//! Each unordered pair is written from both of its rows with conjugate
//! phases, so every filled matrix is exactly Hermitian.

pub mod dense;
pub mod sparse;

pub use sparse::CscMatrix;

use crate::core::param::Param;
use crate::core::{bits, RydbergError};
use crate::subspace::Subspace;
use num_complex::Complex;

/// Diagonal detuning entry for one configuration: the signed sum of Δ
/// over all sites, excited sites contributing `-Δ_k`.
pub(crate) fn diagonal_entry(config: u64, nsites: usize, delta: &Param) -> f64 {
    let mut sum = 0.0;
    for k in 1..=nsites {
        if bits::readbit(config, k) == 1 {
            sum -= delta.site(k);
        } else {
            sum += delta.site(k);
        }
    }
    sum
}

/// Off-diagonal coupling entry for the row holding `lhs`, at the column
/// reached by flipping site `k`. The sign of the phase exponent follows
/// the flip direction: `+ϕ_k` when `lhs` has site `k` in the ground
/// state (excitation created), `-ϕ_k` otherwise.
pub(crate) fn coupling_entry(lhs: u64, k: usize, omega: &Param, phi: &Param) -> Complex<f64> {
    let magnitude = omega.site(k);
    let theta = if bits::readbit(lhs, k) == 0 {
        phi.site(k)
    } else {
        -phi.site(k)
    };
    Complex::new(magnitude * theta.cos(), magnitude * theta.sin())
}

/// Length-checks every supplied parameter against the subspace before a
/// builder touches its destination buffer.
pub(crate) fn validate_params(
    subspace: &Subspace,
    params: &[&Param],
) -> Result<(), RydbergError> {
    for p in params {
        p.validate(subspace.nsites())?;
    }
    Ok(())
}
