// src/hamiltonian/mod.rs

//! Typed Rydberg Hamiltonian models and their matrix dispatch.
//!
//! Two model shapes cover every Hamiltonian this crate evolves, so they
//! form a closed set behind the small [`HamiltonianModel`] capability
//! trait rather than an open hierarchy:
//!
//! - [`XPhase`], the degenerate model: unit coupling, zero detuning and
//!   a single global drive phase;
//! - [`Rydberg`], the general model: a Rydberg interaction constant plus
//!   Ω, ϕ and Δ, each uniform or per-site.
//!
//! A model owns its parameter values only. The matrices it produces are
//! derived, recomputable artifacts: build the sparse pattern once via
//! [`HamiltonianModel::to_sparse`], then hand
//! [`HamiltonianModel::update`] to the time stepper to rewrite values at
//! each clock point against the same layout.

use crate::core::param::Param;
use crate::core::RydbergError;
use crate::matrix::{dense, CscMatrix};
use crate::subspace::Subspace;
use nalgebra::DMatrix;
use num_complex::Complex;

/// Capability interface of a Rydberg Hamiltonian model: the three drive
/// fields, plus the uniform matrix construction entry points.
pub trait HamiltonianModel {
    /// The drive phase ϕ.
    fn phase(&self) -> Param;

    /// The coupling (X-field) magnitude Ω.
    fn coupling(&self) -> Param;

    /// The detuning (Z-field) Δ, or `None` for a model with no diagonal
    /// term at all.
    fn detuning(&self) -> Option<Param>;

    /// Builds the Hamiltonian as a sparse matrix: structural pattern
    /// first, then one value refresh. Detuning-free models allocate no
    /// diagonal slots.
    fn to_sparse(&self, subspace: &Subspace) -> Result<CscMatrix, RydbergError> {
        let mut h = CscMatrix::pattern(subspace, self.detuning().is_some());
        self.update(subspace, &mut h)?;
        Ok(h)
    }

    /// Builds the Hamiltonian as a dense matrix.
    fn to_dense(&self, subspace: &Subspace) -> Result<DMatrix<Complex<f64>>, RydbergError> {
        match self.detuning() {
            Some(delta) => dense::build(subspace, &self.coupling(), &self.phase(), &delta),
            None => dense::build_coupling(subspace, &self.coupling(), &self.phase()),
        }
    }

    /// Rewrites the values of a previously built sparse matrix for the
    /// model's current parameters. This is the entry point a
    /// time-evolution integrator calls at every step.
    fn update(&self, subspace: &Subspace, h: &mut CscMatrix) -> Result<(), RydbergError> {
        match self.detuning() {
            Some(delta) => h.refresh(subspace, &self.coupling(), &self.phase(), &delta),
            None => h.refresh_coupling(subspace, &self.coupling(), &self.phase()),
        }
    }
}

/// The degenerate drive Hamiltonian: coupling fixed at one, no
/// detuning, a single global phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XPhase {
    /// The global drive phase ϕ.
    pub phase: f64,
}

impl XPhase {
    /// Creates the degenerate model with the given global phase.
    pub fn new(phase: f64) -> Self {
        Self { phase }
    }
}

impl HamiltonianModel for XPhase {
    fn phase(&self) -> Param {
        Param::Scalar(self.phase)
    }

    fn coupling(&self) -> Param {
        Param::Scalar(1.0)
    }

    fn detuning(&self) -> Option<Param> {
        None
    }
}

/// The general driven Rydberg Hamiltonian.
///
/// `interaction` is the Rydberg interaction constant of the underlying
/// atomic species. Within the blockade-constrained subspace no valid
/// configuration excites an interacting pair, so the constant never
/// reaches the matrix; it is carried so a model fully describes the
/// physical system it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rydberg {
    /// Rydberg interaction constant.
    pub interaction: f64,
    /// Coupling magnitude Ω.
    pub omega: Param,
    /// Coupling phase ϕ.
    pub phi: Param,
    /// Detuning Δ.
    pub delta: Param,
}

impl Rydberg {
    /// Creates the general model from its interaction constant and the
    /// three drive parameters.
    pub fn new(
        interaction: f64,
        omega: impl Into<Param>,
        phi: impl Into<Param>,
        delta: impl Into<Param>,
    ) -> Self {
        Self {
            interaction,
            omega: omega.into(),
            phi: phi.into(),
            delta: delta.into(),
        }
    }
}

impl HamiltonianModel for Rydberg {
    fn phase(&self) -> Param {
        self.phi.clone()
    }

    fn coupling(&self) -> Param {
        self.omega.clone()
    }

    fn detuning(&self) -> Option<Param> {
        Some(self.delta.clone())
    }
}
