//! Dense Hamiltonian fill.
//!
//! Builds the full `dim × dim` complex matrix of the driven Rydberg
//! Hamiltonian restricted to a subspace. The off-diagonal placement
//! locates each flipped configuration by binary search; a miss simply
//! means the flip leaves the blockade-constrained subspace and no
//! coupling term exists for that pair.

use super::{coupling_entry, diagonal_entry, validate_params};
use crate::core::param::Param;
use crate::core::{bits, RydbergError};
use crate::subspace::Subspace;
use nalgebra::DMatrix;
use num_complex::Complex;
use num_traits::Zero;

/// Fills `h` with the Hamiltonian of `subspace` under drive parameters
/// Ω (`omega`), ϕ (`phi`) and detuning Δ (`delta`).
///
/// Every slot of `h` is overwritten; nothing stale survives a call.
/// The result is exactly Hermitian: each coupling pair `(i, j)` is
/// written once from row `i` and once, conjugated, from row `j`.
pub fn fill(
    h: &mut DMatrix<Complex<f64>>,
    subspace: &Subspace,
    omega: &Param,
    phi: &Param,
    delta: &Param,
) -> Result<(), RydbergError> {
    validate_params(subspace, &[omega, phi, delta])?;
    check_shape(h, subspace)?;
    h.fill(Complex::zero());
    let nsites = subspace.nsites();
    for i in 0..subspace.dim() {
        let lhs = subspace.config(i);
        h[(i, i)] = Complex::new(diagonal_entry(lhs, nsites, delta), 0.0);
        fill_row_couplings(h, subspace, i, lhs, omega, phi);
    }
    Ok(())
}

/// Coupling-only variant of [`fill`]: the diagonal step is omitted
/// entirely, leaving the diagonal at zero. Used by the pure-drive
/// (detuning-free) Hamiltonian model.
pub fn fill_coupling(
    h: &mut DMatrix<Complex<f64>>,
    subspace: &Subspace,
    omega: &Param,
    phi: &Param,
) -> Result<(), RydbergError> {
    validate_params(subspace, &[omega, phi])?;
    check_shape(h, subspace)?;
    h.fill(Complex::zero());
    for i in 0..subspace.dim() {
        let lhs = subspace.config(i);
        fill_row_couplings(h, subspace, i, lhs, omega, phi);
    }
    Ok(())
}

/// Allocates and fills a fresh matrix; see [`fill`].
pub fn build(
    subspace: &Subspace,
    omega: &Param,
    phi: &Param,
    delta: &Param,
) -> Result<DMatrix<Complex<f64>>, RydbergError> {
    let dim = subspace.dim();
    let mut h = DMatrix::zeros(dim, dim);
    fill(&mut h, subspace, omega, phi, delta)?;
    Ok(h)
}

/// Allocates and fills a fresh detuning-free matrix; see [`fill_coupling`].
pub fn build_coupling(
    subspace: &Subspace,
    omega: &Param,
    phi: &Param,
) -> Result<DMatrix<Complex<f64>>, RydbergError> {
    let dim = subspace.dim();
    let mut h = DMatrix::zeros(dim, dim);
    fill_coupling(&mut h, subspace, omega, phi)?;
    Ok(h)
}

fn check_shape(h: &DMatrix<Complex<f64>>, subspace: &Subspace) -> Result<(), RydbergError> {
    let dim = subspace.dim();
    if h.nrows() != dim || h.ncols() != dim {
        return Err(RydbergError::DimensionMismatch {
            expected: dim,
            actual: h.nrows().max(h.ncols()),
        });
    }
    Ok(())
}

/// Places the coupling terms of one row. For each site `k` the flipped
/// configuration is searched in the sorted subspace; `index_of` only
/// reports a hit on an exact configuration match, so a term can never
/// land at a column holding a different configuration.
fn fill_row_couplings(
    h: &mut DMatrix<Complex<f64>>,
    subspace: &Subspace,
    i: usize,
    lhs: u64,
    omega: &Param,
    phi: &Param,
) {
    for k in 1..=subspace.nsites() {
        let rhs = bits::flip(lhs, 1 << (k - 1));
        if let Some(j) = subspace.index_of(rhs) {
            h[(i, j)] = coupling_entry(lhs, k, omega, phi);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ConstraintGraph;

    fn unconstrained(n: usize) -> Subspace {
        Subspace::from_graph(&ConstraintGraph::new(n, &[]).unwrap()).unwrap()
    }

    #[test]
    fn unconstrained_pair_with_unit_drive() {
        // n = 2, Ω = 1, ϕ = 0, Δ = 0: nonzero entries exactly at
        // Hamming-distance-1 pairs, each equal to 1, zero diagonal.
        let s = unconstrained(2);
        let h = build(&s, &1.0.into(), &0.0.into(), &0.0.into()).unwrap();
        assert_eq!(h.nrows(), 4);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if (s.config(i) ^ s.config(j)).count_ones() == 1 {
                    Complex::new(1.0, 0.0)
                } else {
                    Complex::zero()
                };
                assert!(
                    (h[(i, j)] - expected).norm() < 1e-12,
                    "H[{i},{j}] = {}, expected {expected}",
                    h[(i, j)]
                );
            }
        }
    }

    #[test]
    fn per_site_detuning_on_diagonal() {
        let s = unconstrained(2);
        let h = build(
            &s,
            &0.0.into(),
            &0.0.into(),
            &vec![1.0, 2.0].into(),
        )
        .unwrap();
        let expected = [3.0, 1.0, -1.0, -3.0];
        for (i, &e) in expected.iter().enumerate() {
            assert!((h[(i, i)] - Complex::new(e, 0.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn couplings_land_at_searched_column_not_on_diagonal_band() {
        // Blockaded pair: subspace {0, 1, 2}. Flipping site 2 of config 1
        // would give 3, which is outside the subspace; the naive
        // neighbor-band placement would smear a term near the diagonal
        // instead of dropping it.
        let g = ConstraintGraph::new(2, &[(1, 2)]).unwrap();
        let s = Subspace::from_graph(&g).unwrap();
        let h = build(&s, &1.0.into(), &0.0.into(), &0.0.into()).unwrap();
        assert_eq!(h.nrows(), 3);
        // Couplings exist exactly between 0↔1 and 0↔2.
        assert!((h[(0, 1)] - Complex::new(1.0, 0.0)).norm() < 1e-12);
        assert!((h[(0, 2)] - Complex::new(1.0, 0.0)).norm() < 1e-12);
        assert!(h[(1, 2)].norm() < 1e-12);
        assert!(h[(2, 1)].norm() < 1e-12);
        for i in 0..3 {
            assert!(h[(i, i)].norm() < 1e-12);
        }
    }

    #[test]
    fn coupling_only_fill_has_zero_diagonal() {
        let s = unconstrained(3);
        let h = build_coupling(&s, &2.0.into(), &0.3.into()).unwrap();
        for i in 0..s.dim() {
            assert!(h[(i, i)].norm() < 1e-12);
        }
    }

    #[test]
    fn hermitian_with_per_site_phases() {
        let s = unconstrained(3);
        let h = build(
            &s,
            &vec![1.0, 0.5, 2.0].into(),
            &vec![0.1, -0.7, 1.3].into(),
            &vec![0.4, 0.0, -1.1].into(),
        )
        .unwrap();
        for i in 0..s.dim() {
            for j in 0..s.dim() {
                assert!(
                    (h[(i, j)] - h[(j, i)].conj()).norm() < 1e-12,
                    "not Hermitian at ({i},{j})"
                );
            }
        }
    }

    #[test]
    fn coupling_magnitude_and_phase_symmetry() {
        let s = unconstrained(2);
        let omega = Param::PerSite(vec![1.5, 0.75]);
        let phi = Param::PerSite(vec![0.2, 0.9]);
        let h = build(&s, &omega, &phi, &0.0.into()).unwrap();
        for i in 0..s.dim() {
            for j in 0..s.dim() {
                let diff = s.config(i) ^ s.config(j);
                if diff.count_ones() == 1 {
                    let k = diff.trailing_zeros() as usize + 1;
                    assert!((h[(i, j)].norm() - omega.site(k)).abs() < 1e-12);
                    assert!((h[(i, j)].arg() + h[(j, i)].arg()).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn parameter_length_mismatch_is_rejected_before_writes() {
        let s = unconstrained(2);
        let mut h = DMatrix::from_element(s.dim(), s.dim(), Complex::new(9.0, 9.0));
        let err = fill(
            &mut h,
            &s,
            &vec![1.0, 2.0, 3.0].into(),
            &0.0.into(),
            &0.0.into(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RydbergError::ParameterLength {
                expected: 2,
                actual: 3
            }
        );
        // Nothing was written.
        assert!((h[(0, 0)] - Complex::new(9.0, 9.0)).norm() < 1e-12);
    }

    #[test]
    fn wrong_buffer_shape_is_rejected() {
        let s = unconstrained(2);
        let mut h = DMatrix::zeros(3, 3);
        let err = fill(&mut h, &s, &1.0.into(), &0.0.into(), &0.0.into()).unwrap_err();
        assert_eq!(
            err,
            RydbergError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn trivial_subspace_builds_one_by_one_matrix() {
        let s = Subspace::from_witnesses(0, &[]).unwrap();
        let h = build(&s, &1.0.into(), &0.0.into(), &2.0.into()).unwrap();
        assert_eq!(h.nrows(), 1);
        assert!(h[(0, 0)].norm() < 1e-12); // no sites, empty detuning sum
    }
}
