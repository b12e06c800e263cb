//! Condensation graph: one node per SCC, edges between components.

use serde::Serialize;

use crate::matrix::AdjacencyMatrix;
use crate::reach::scc::{Component, component_index};

/// The graph obtained by collapsing each SCC into a single node.
///
/// Node `c` stands for `components[c]`; its label lists the component's
/// members 1-based and comma-joined. Edges never loop back to the same node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condensation {
    pub matrix: AdjacencyMatrix,
    pub labels: Vec<String>,
}

impl Condensation {
    /// Number of condensed nodes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Number of cross-component edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }
}

/// Build the condensation of `original` with respect to `sccs`.
///
/// Every original edge `u → v` whose endpoints lie in different components
/// sets the single boolean edge `C(u) → C(v)`; parallel crossings collapse
/// and intra-component edges are dropped.
///
/// # Panics
///
/// Panics if `sccs` does not cover every vertex of `original`.
#[must_use]
pub fn build_condensation(original: &AdjacencyMatrix, sccs: &[Component]) -> Condensation {
    let n = original.size();
    let index = component_index(n, sccs);
    let mut matrix = AdjacencyMatrix::empty(sccs.len());

    for u in 0..n {
        for v in original.successors(u) {
            let (cu, cv) = (index[u], index[v]);
            if cu != cv {
                matrix.set(cu, cv, true);
            }
        }
    }

    Condensation {
        matrix,
        labels: sccs.iter().map(Component::label).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reach::closure::warshall_closure;
    use crate::reach::scc::extract_sccs;

    fn condense(n: usize, edges: &[(usize, usize)]) -> Condensation {
        let m = AdjacencyMatrix::from_edges(n, edges);
        let sccs = extract_sccs(&warshall_closure(&m).strong_connectivity());
        build_condensation(&m, &sccs)
    }

    #[test]
    fn strongly_connected_triangle_plus_isolated() {
        let c = condense(4, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(c.size(), 2);
        assert_eq!(c.labels, vec!["1,2,3".to_string(), "4".to_string()]);
        assert_eq!(c.edge_count(), 0);
    }

    #[test]
    fn parallel_crossings_collapse() {
        // {0,1} cycle, both members point at 2
        let c = condense(3, &[(0, 1), (1, 0), (0, 2), (1, 2)]);
        assert_eq!(c.size(), 2);
        assert!(c.matrix.get(0, 1));
        assert_eq!(c.edge_count(), 1);
    }

    #[test]
    fn self_loops_are_dropped() {
        let c = condense(2, &[(0, 0), (0, 1)]);
        assert!(!c.matrix.get(0, 0));
        assert!(c.matrix.get(0, 1));
    }

    #[test]
    fn empty_input_gives_empty_condensation() {
        let c = condense(0, &[]);
        assert_eq!(c.size(), 0);
        assert!(c.labels.is_empty());
    }
}
