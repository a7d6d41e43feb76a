// src/subspace/mod.rs

//! Blockade-constrained configuration subspace.
//!
//! A configuration violates the blockade constraint iff two sites joined
//! by a constraint edge are both excited. Every valid configuration is
//! contained in at least one maximal independent set of the constraint
//! graph, so the union of the "free sublattices" of all maximal
//! independent sets (all bit-subsets of each witness mask) is exactly
//! the valid subspace.
//!
//! The subspace is built once per graph and immutable afterwards; one
//! simulation shares it by reference across every matrix build and
//! refresh.

use crate::core::RydbergError;
use crate::graph::ConstraintGraph;

/// The ordered set of valid configurations of a constrained atom array.
///
/// `configs` is strictly increasing with no duplicates; row/column `i`
/// of every Hamiltonian matrix built from this subspace corresponds to
/// `configs[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subspace {
    nsites: usize,
    configs: Vec<u64>,
}

impl Subspace {
    /// Builds the subspace from a family of maximal-independent-set
    /// witness masks.
    ///
    /// For each witness, every site outside it is fixed to the ground
    /// state and every site inside it is free, so the witness
    /// contributes all bit-subsets of its mask. The union is sorted and
    /// deduplicated. An empty family (or `nsites = 0`) yields the
    /// single configuration `0`.
    pub fn from_witnesses(nsites: usize, witnesses: &[u64]) -> Result<Self, RydbergError> {
        if nsites > 64 {
            return Err(RydbergError::TooManySites { sites: nsites });
        }
        let mut configs = vec![0u64];
        for &witness in witnesses {
            // Standard subset-mask walk: enumerates every non-empty
            // subset of `witness` in decreasing order.
            let mut sub = witness;
            while sub != 0 {
                configs.push(sub);
                sub = (sub - 1) & witness;
            }
        }
        configs.sort_unstable();
        configs.dedup();
        Ok(Self { nsites, configs })
    }

    /// Builds the subspace of a constraint graph by enumerating its
    /// maximal independent sets and delegating to
    /// [`Subspace::from_witnesses`].
    pub fn from_graph(graph: &ConstraintGraph) -> Result<Self, RydbergError> {
        Self::from_witnesses(graph.nsites(), &graph.maximal_independent_sets())
    }

    /// Builds the subspace of a planar atom arrangement under a blockade
    /// radius: the unit-disk constraint graph followed by
    /// [`Subspace::from_graph`].
    pub fn from_positions(positions: &[(f64, f64)], radius: f64) -> Result<Self, RydbergError> {
        Self::from_graph(&ConstraintGraph::unit_disk(positions, radius)?)
    }

    /// Number of sites of the underlying array.
    pub fn nsites(&self) -> usize {
        self.nsites
    }

    /// Subspace dimension (number of valid configurations).
    pub fn dim(&self) -> usize {
        self.configs.len()
    }

    /// The configuration at basis index `i`.
    pub fn config(&self, i: usize) -> u64 {
        self.configs[i]
    }

    /// The sorted configuration sequence.
    pub fn configs(&self) -> &[u64] {
        &self.configs
    }

    /// Basis index of a configuration, or `None` if it is not in the
    /// subspace. Binary search on the sorted sequence.
    pub fn index_of(&self, config: u64) -> Option<usize> {
        self.configs.binary_search(&config).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witness_subsets_are_enumerated() {
        // Single witness {1,3} on 3 sites: subsets 0, 1, 4, 5.
        let s = Subspace::from_witnesses(3, &[0b101]).unwrap();
        assert_eq!(s.configs(), &[0b000, 0b001, 0b100, 0b101]);
    }

    #[test]
    fn union_is_sorted_and_deduplicated() {
        // Witnesses {1,3} and {2} share the empty configuration.
        let s = Subspace::from_witnesses(3, &[0b101, 0b010]).unwrap();
        assert_eq!(s.configs(), &[0b000, 0b001, 0b010, 0b100, 0b101]);
        for w in s.configs().windows(2) {
            assert!(w[0] < w[1], "configs not strictly increasing");
        }
    }

    #[test]
    fn every_config_is_subset_of_a_witness() {
        let witnesses = [0b1011, 0b0110, 0b1101];
        let s = Subspace::from_witnesses(4, &witnesses).unwrap();
        for &c in s.configs() {
            assert!(
                witnesses.iter().any(|&w| c & !w == 0),
                "config {c:#b} outside every witness"
            );
        }
    }

    #[test]
    fn zero_sites_yield_the_trivial_subspace() {
        let s = Subspace::from_witnesses(0, &[]).unwrap();
        assert_eq!(s.configs(), &[0]);
        assert_eq!(s.dim(), 1);
    }

    #[test]
    fn unconstrained_pair_spans_all_configurations() {
        // Scenario: two sites, no constraint edges.
        let g = ConstraintGraph::new(2, &[]).unwrap();
        let s = Subspace::from_graph(&g).unwrap();
        assert_eq!(s.configs(), &[0, 1, 2, 3]);
    }

    #[test]
    fn blockaded_pair_excludes_double_excitation() {
        // Scenario: two sites joined by one constraint edge.
        let g = ConstraintGraph::new(2, &[(1, 2)]).unwrap();
        let s = Subspace::from_graph(&g).unwrap();
        assert_eq!(s.configs(), &[0, 1, 2]);
    }

    #[test]
    fn graph_subspace_respects_the_constraint() {
        // Path 1 - 2 - 3 - 4: no two adjacent sites both excited.
        let g = ConstraintGraph::new(4, &[(1, 2), (2, 3), (3, 4)]).unwrap();
        let s = Subspace::from_graph(&g).unwrap();
        for &c in s.configs() {
            for a in 1..=4usize {
                for b in (a + 1)..=4 {
                    if g.has_edge(a, b) {
                        assert!(
                            (c >> (a - 1)) & 1 == 0 || (c >> (b - 1)) & 1 == 0,
                            "config {c:#b} excites blockaded pair ({a},{b})"
                        );
                    }
                }
            }
        }
        // Fibonacci count for the path graph on 4 vertices.
        assert_eq!(s.dim(), 8);
    }

    #[test]
    fn index_of_round_trips() {
        let s = Subspace::from_witnesses(3, &[0b101, 0b010]).unwrap();
        for i in 0..s.dim() {
            assert_eq!(s.index_of(s.config(i)), Some(i));
        }
        assert_eq!(s.index_of(0b111), None);
    }

    #[test]
    fn positions_entry_point_matches_graph_entry_point() {
        let positions = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
        let via_positions = Subspace::from_positions(&positions, 1.1).unwrap();
        let g = ConstraintGraph::new(3, &[(1, 2), (2, 3)]).unwrap();
        let via_graph = Subspace::from_graph(&g).unwrap();
        assert_eq!(via_positions, via_graph);
    }
}
