// src/graph/mod.rs

//! Blockade constraint graphs over atom sites.
//!
//! A constraint edge between two sites forbids configurations with both
//! sites excited. Graphs are stored as per-vertex neighbor bitsets, which
//! keeps the whole crate within the `u64` configuration encoding (at most
//! 64 sites) and makes the clique enumeration below a handful of word
//! operations per step.
//!
//! Site indices are 1-based throughout, matching the bit convention of
//! [`crate::core::bits`]: site `k` lives at bit position `k - 1`.

use crate::core::RydbergError;

/// Returns a mask with one bit set per site of an `nsites`-site array.
#[inline]
const fn all_sites(nsites: usize) -> u64 {
    if nsites >= 64 { u64::MAX } else { (1u64 << nsites) - 1 }
}

/// An undirected constraint graph on at most 64 sites.
///
/// `adj[v]` is the neighbor bitset of the vertex at bit position `v`;
/// the representation is symmetric and free of self-loops by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGraph {
    nsites: usize,
    adj: Vec<u64>,
}

impl ConstraintGraph {
    /// Builds a graph from a list of edges between 1-indexed sites.
    ///
    /// Precondition: every endpoint lies in `1..=nsites` and no edge is
    /// a self-loop; both are checked with debug assertions.
    pub fn new(nsites: usize, edges: &[(usize, usize)]) -> Result<Self, RydbergError> {
        if nsites > 64 {
            return Err(RydbergError::TooManySites { sites: nsites });
        }
        let mut adj = vec![0u64; nsites];
        for &(a, b) in edges {
            debug_assert!((1..=nsites).contains(&a), "site {a} out of range");
            debug_assert!((1..=nsites).contains(&b), "site {b} out of range");
            debug_assert_ne!(a, b, "self-loop at site {a}");
            adj[a - 1] |= 1 << (b - 1);
            adj[b - 1] |= 1 << (a - 1);
        }
        Ok(Self { nsites, adj })
    }

    /// Builds the unit-disk (blockade) graph of a planar atom arrangement:
    /// two atoms are constrained whenever their Euclidean distance is at
    /// most `radius`.
    pub fn unit_disk(positions: &[(f64, f64)], radius: f64) -> Result<Self, RydbergError> {
        let nsites = positions.len();
        if nsites > 64 {
            return Err(RydbergError::TooManySites { sites: nsites });
        }
        let r_sq = radius * radius;
        let mut adj = vec![0u64; nsites];
        for i in 0..nsites {
            for j in (i + 1)..nsites {
                let dx = positions[i].0 - positions[j].0;
                let dy = positions[i].1 - positions[j].1;
                if dx * dx + dy * dy <= r_sq {
                    adj[i] |= 1 << j;
                    adj[j] |= 1 << i;
                }
            }
        }
        Ok(Self { nsites, adj })
    }

    /// Number of sites (vertices).
    pub fn nsites(&self) -> usize {
        self.nsites
    }

    /// Whether sites `a` and `b` (1-indexed) are joined by a constraint edge.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        (self.adj[a - 1] >> (b - 1)) & 1 == 1
    }

    /// The complement graph on the same vertex set.
    pub fn complement(&self) -> ConstraintGraph {
        let mask = all_sites(self.nsites);
        let adj = (0..self.nsites)
            .map(|v| !self.adj[v] & mask & !(1u64 << v))
            .collect();
        ConstraintGraph {
            nsites: self.nsites,
            adj,
        }
    }

    /// Enumerates all maximal cliques as vertex-set masks.
    ///
    /// Bron–Kerbosch with pivoting. Worst-case exponential, but blockade
    /// graphs are bounded-degree geometric graphs for which the clique
    /// count stays small. The empty graph on zero sites yields the single
    /// empty clique.
    pub fn maximal_cliques(&self) -> Vec<u64> {
        let mut cliques = Vec::new();
        self.bron_kerbosch(0, all_sites(self.nsites), 0, &mut cliques);
        cliques
    }

    /// Enumerates all maximal independent sets as vertex-set masks.
    ///
    /// A maximal independent set of a graph is a maximal clique of its
    /// complement.
    pub fn maximal_independent_sets(&self) -> Vec<u64> {
        self.complement().maximal_cliques()
    }

    fn bron_kerbosch(&self, r: u64, mut p: u64, mut x: u64, out: &mut Vec<u64>) {
        if p == 0 && x == 0 {
            out.push(r);
            return;
        }
        // Pivot on the vertex of P ∪ X covering the most of P, so the
        // candidate loop only visits P minus the pivot's neighborhood.
        let mut pivot_cover = 0u64;
        let mut best = u32::MAX;
        let mut scan = p | x;
        while scan != 0 {
            let u = scan.trailing_zeros() as usize;
            let uncovered = (p & !self.adj[u]).count_ones();
            if best == u32::MAX || uncovered < best {
                best = uncovered;
                pivot_cover = self.adj[u];
            }
            scan &= scan - 1;
        }
        let mut candidates = p & !pivot_cover;
        while candidates != 0 {
            let v = candidates.trailing_zeros() as usize;
            let vb = 1u64 << v;
            self.bron_kerbosch(r | vb, p & self.adj[v], x & self.adj[v], out);
            p &= !vb;
            x |= vb;
            candidates &= !vb;
        }
    }
}
