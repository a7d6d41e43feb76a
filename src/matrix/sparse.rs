//! Two-phase sparse Hamiltonian storage.
//!
//! A time-evolution loop asks for the same matrix with new parameter
//! values at every step. The structure (which pairs of configurations
//! couple, plus the diagonal) depends only on the subspace, so it is
//! derived once as a compressed-sparse-column pattern; every later step
//! rewrites the numeric values in place against the fixed slot layout,
//! with no searches, no allocation and no structural recomputation.
//!
//! During a refresh the flipped site of an off-diagonal slot is
//! recovered from the XOR of the row and column configurations; the
//! structural match was already established when the pattern was built,
//! so [`crate::core::bits::log2i`] failing here means the pattern and
//! subspace have drifted apart and the error propagates.

use super::{coupling_entry, diagonal_entry, validate_params};
use crate::core::param::Param;
use crate::core::{bits, RydbergError};
use crate::subspace::Subspace;
use nalgebra::DMatrix;
use num_complex::Complex;
use num_traits::Zero;

/// A square complex matrix in compressed-sparse-column form.
///
/// `col_ptr[j]..col_ptr[j + 1]` are the slot indices of column `j`;
/// rows are sorted within each column. After construction the layout is
/// fixed: only [`CscMatrix::refresh`] and
/// [`CscMatrix::refresh_coupling`] touch the matrix, and they rewrite
/// values only.
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix {
    dim: usize,
    col_ptr: Vec<usize>,
    row_indices: Vec<usize>,
    values: Vec<Complex<f64>>,
}

impl CscMatrix {
    /// Builds the zero-valued sparsity pattern of a subspace.
    ///
    /// Column `j` holds one slot per configuration bit-flip-adjacent to
    /// `subspace[j]` and present in the subspace, plus the diagonal slot
    /// when `diagonal` is set. Adjacency is symmetric, so the pattern
    /// is too.
    pub fn pattern(subspace: &Subspace, diagonal: bool) -> CscMatrix {
        let dim = subspace.dim();
        let nsites = subspace.nsites();
        let mut col_ptr = Vec::with_capacity(dim + 1);
        let mut row_indices = Vec::new();
        col_ptr.push(0);
        let mut rows = Vec::with_capacity(nsites + 1);
        for j in 0..dim {
            rows.clear();
            if diagonal {
                rows.push(j);
            }
            let cfg = subspace.config(j);
            for k in 1..=nsites {
                if let Some(i) = subspace.index_of(bits::flip(cfg, 1 << (k - 1))) {
                    rows.push(i);
                }
            }
            // Distinct sites flip to distinct configurations, so the
            // column has no duplicates; sorting fixes the slot order.
            rows.sort_unstable();
            row_indices.extend_from_slice(&rows);
            col_ptr.push(row_indices.len());
        }
        let values = vec![Complex::zero(); row_indices.len()];
        CscMatrix {
            dim,
            col_ptr,
            row_indices,
            values,
        }
    }

    /// Rewrites every stored value for new parameters, leaving the
    /// structure untouched.
    ///
    /// Diagonal slots receive the signed detuning sum of their
    /// configuration; off-diagonal slots receive the coupling term of
    /// their row/column pair, the flipped site recovered from the
    /// configuration XOR.
    pub fn refresh(
        &mut self,
        subspace: &Subspace,
        omega: &Param,
        phi: &Param,
        delta: &Param,
    ) -> Result<(), RydbergError> {
        validate_params(subspace, &[omega, phi, delta])?;
        self.check_shape(subspace)?;
        let nsites = subspace.nsites();
        for j in 0..self.dim {
            let col_cfg = subspace.config(j);
            for slot in self.col_ptr[j]..self.col_ptr[j + 1] {
                let i = self.row_indices[slot];
                self.values[slot] = if i == j {
                    Complex::new(diagonal_entry(col_cfg, nsites, delta), 0.0)
                } else {
                    let row_cfg = subspace.config(i);
                    let k = bits::log2i(row_cfg ^ col_cfg)?;
                    coupling_entry(row_cfg, k, omega, phi)
                };
            }
        }
        Ok(())
    }

    /// Coupling-only refresh for patterns built without diagonal slots.
    ///
    /// A diagonal slot encountered here has a zero configuration XOR and
    /// therefore fails the `log2i` domain check: the pattern does not
    /// belong to a pure-coupling Hamiltonian.
    pub fn refresh_coupling(
        &mut self,
        subspace: &Subspace,
        omega: &Param,
        phi: &Param,
    ) -> Result<(), RydbergError> {
        validate_params(subspace, &[omega, phi])?;
        self.check_shape(subspace)?;
        for j in 0..self.dim {
            let col_cfg = subspace.config(j);
            for slot in self.col_ptr[j]..self.col_ptr[j + 1] {
                let row_cfg = subspace.config(self.row_indices[slot]);
                let k = bits::log2i(row_cfg ^ col_cfg)?;
                self.values[slot] = coupling_entry(row_cfg, k, omega, phi);
            }
        }
        Ok(())
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored slots.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Column offsets; length `dim + 1`.
    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    /// Row index of each slot, column-major.
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Stored values, column-major.
    pub fn values(&self) -> &[Complex<f64>] {
        &self.values
    }

    /// The entry at `(i, j)`; zero when no slot exists there.
    pub fn get(&self, i: usize, j: usize) -> Complex<f64> {
        let col = &self.row_indices[self.col_ptr[j]..self.col_ptr[j + 1]];
        match col.binary_search(&i) {
            Ok(pos) => self.values[self.col_ptr[j] + pos],
            Err(_) => Complex::zero(),
        }
    }

    /// Expands to a dense matrix. Intended for tests and small systems.
    pub fn to_dense(&self) -> DMatrix<Complex<f64>> {
        let mut h = DMatrix::zeros(self.dim, self.dim);
        for j in 0..self.dim {
            for slot in self.col_ptr[j]..self.col_ptr[j + 1] {
                h[(self.row_indices[slot], j)] = self.values[slot];
            }
        }
        h
    }

    fn check_shape(&self, subspace: &Subspace) -> Result<(), RydbergError> {
        if self.dim != subspace.dim() {
            return Err(RydbergError::DimensionMismatch {
                expected: subspace.dim(),
                actual: self.dim,
            });
        }
        Ok(())
    }
}
