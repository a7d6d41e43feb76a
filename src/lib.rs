// src/lib.rs

//! `rydberg` - Rydberg-atom array Hamiltonians on blockade-constrained
//! configuration subspaces.
//!
//! A Rydberg blockade forbids simultaneous excitation of atoms closer
//! than the blockade radius. This crate enumerates the configuration
//! subspace that survives the constraint and builds the driven
//! many-body Hamiltonian restricted to it, with a two-phase sparse
//! representation so a time-evolution loop can rewrite matrix values at
//! every clock point without recomputing structure.
//!
//! The pipeline is: constraint graph → maximal independent sets →
//! sorted configuration [`Subspace`] → dense or sparse Hermitian matrix
//! under the drive parameters Ω (coupling magnitude), ϕ (coupling
//! phase) and Δ (detuning), each a uniform scalar or one value per
//! site.
//!
//! ```
//! use rydberg::{ConstraintGraph, HamiltonianModel, Param, Rydberg, Subspace};
//!
//! // Two atoms within blockade range: the doubly excited configuration
//! // is projected out, leaving the three-dimensional subspace {0, 1, 2}.
//! let graph = ConstraintGraph::new(2, &[(1, 2)])?;
//! let subspace = Subspace::from_graph(&graph)?;
//! assert_eq!(subspace.configs(), &[0, 1, 2]);
//!
//! // A resonant drive with per-site detuning.
//! let mut model = Rydberg::new(0.0, 1.0, 0.0, vec![0.5, -0.5]);
//!
//! // Build the sparse matrix once, then refresh values as the drive
//! // ramps; the sparsity layout never changes.
//! let mut h = model.to_sparse(&subspace)?;
//! let pattern = h.row_indices().to_vec();
//! model.omega = Param::Scalar(2.0);
//! model.update(&subspace, &mut h)?;
//! assert_eq!(h.row_indices(), pattern.as_slice());
//! # Ok::<(), rydberg::RydbergError>(())
//! ```

pub mod core;
pub mod graph;
pub mod hamiltonian;
pub mod matrix;
pub mod subspace;

// Re-export the most common types for easier top-level use
pub use crate::core::{Param, RydbergError};
pub use graph::ConstraintGraph;
pub use hamiltonian::{HamiltonianModel, Rydberg, XPhase};
pub use matrix::CscMatrix;
pub use subspace::Subspace;
