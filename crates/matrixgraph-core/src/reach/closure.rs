//! Warshall transitive closure and the strong-connectivity relation.

use serde::Serialize;
use tracing::trace;

use crate::matrix::AdjacencyMatrix;

/// Reflexive-transitive closure `R` of an adjacency matrix.
///
/// `R[i][j]` is true iff a directed path of length ≥ 0 leads from `i` to `j`.
/// Only [`warshall_closure`] constructs this type, so holding one proves the
/// closure has been run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reachability(AdjacencyMatrix);

impl Reachability {
    #[must_use]
    pub const fn matrix(&self) -> &AdjacencyMatrix {
        &self.0
    }

    #[must_use]
    pub fn reaches(&self, from: usize, to: usize) -> bool {
        self.0.get(from, to)
    }

    /// `S[i][j] = R[i][j] ∧ R[j][i]`.
    #[must_use]
    pub fn strong_connectivity(&self) -> StrongConnectivity {
        let n = self.0.size();
        let mut s = AdjacencyMatrix::empty(n);
        for i in 0..n {
            for j in 0..n {
                if self.0.get(i, j) && self.0.get(j, i) {
                    s.set(i, j, true);
                }
            }
        }
        StrongConnectivity(s)
    }
}

/// Mutual-reachability relation `S`, an equivalence relation over vertices.
///
/// Only obtainable from a [`Reachability`], which keeps it reflexive,
/// symmetric, and transitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StrongConnectivity(AdjacencyMatrix);

impl StrongConnectivity {
    #[must_use]
    pub const fn matrix(&self) -> &AdjacencyMatrix {
        &self.0
    }

    #[must_use]
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.0.get(a, b)
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.0.size()
    }
}

/// Warshall's algorithm over a copy of `matrix` with the diagonal set.
///
/// The pivot `k` is the outermost loop; after iteration `k`, `R[i][j]` holds
/// iff a path exists using only intermediates from `0..=k`.
#[must_use]
pub fn warshall_closure(matrix: &AdjacencyMatrix) -> Reachability {
    let n = matrix.size();
    let mut r = matrix.clone();
    for i in 0..n {
        r.set(i, i, true);
    }
    for k in 0..n {
        for i in 0..n {
            if !r.get(i, k) {
                continue;
            }
            for j in 0..n {
                if r.get(k, j) {
                    r.set(i, j, true);
                }
            }
        }
        trace!(pivot = k, "warshall pivot done");
    }
    Reachability(r)
}

/// Free-function form of [`Reachability::strong_connectivity`].
#[must_use]
pub fn strong_connectivity(reachability: &Reachability) -> StrongConnectivity {
    reachability.strong_connectivity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_reflexive_even_without_edges() {
        let r = warshall_closure(&AdjacencyMatrix::empty(3));
        for i in 0..3 {
            assert!(r.reaches(i, i));
        }
        assert_eq!(r.matrix().edge_count(), 3);
    }

    #[test]
    fn chain_reaches_forward_only() {
        let m = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let r = warshall_closure(&m);
        assert!(r.reaches(0, 3));
        assert!(r.reaches(1, 3));
        assert!(!r.reaches(3, 0));
        assert!(!r.reaches(2, 1));
    }

    #[test]
    fn pivot_order_handles_back_references() {
        // 2 → 0 → 1 needs pivot 0 before 2's row is complete; a wrong loop
        // nesting misses 3 → 1 via 3 → 2 → 0 → 1.
        let m = AdjacencyMatrix::from_edges(4, &[(3, 2), (2, 0), (0, 1)]);
        let r = warshall_closure(&m);
        assert!(r.reaches(3, 1));
        assert!(r.reaches(3, 0));
        assert!(r.reaches(2, 1));
    }

    #[test]
    fn strong_connectivity_of_cycle_plus_tail() {
        // 0 → 1 → 0, 1 → 2
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 0), (1, 2)]);
        let s = warshall_closure(&m).strong_connectivity();
        assert!(s.connected(0, 1) && s.connected(1, 0));
        assert!(!s.connected(1, 2));
        assert!(s.connected(2, 2));
    }
}
