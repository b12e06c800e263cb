//! Reachability, strongly connected components, and condensation.
//!
//! # Pipeline
//!
//! ```text
//! AdjacencyMatrix M
//!        ↓  closure::warshall_closure()
//! Reachability R        (reflexive, transitive)
//!        ↓  Reachability::strong_connectivity()
//! StrongConnectivity S  (S[i][j] = R[i][j] ∧ R[j][i])
//!        ↓  scc::extract_sccs()
//! SccList               (ordered by smallest member)
//!        ↓  condense::build_condensation(M, sccs)
//! Condensation          (DAG over components + labels)
//! ```
//!
//! Each stage's output type is only produced by the stage before it, so SCC
//! extraction can never see a relation that was not transitively closed.
//!
//! ## Typical Usage
//!
//! ```rust
//! use matrixgraph_core::matrix::AdjacencyMatrix;
//! use matrixgraph_core::reach::ConnectivityAnalysis;
//!
//! let m = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 0)]);
//! let analysis = ConnectivityAnalysis::from_matrix(&m);
//! assert_eq!(analysis.scc_count(), 2);
//! assert_eq!(analysis.condensation.labels, vec!["1,2,3", "4"]);
//! ```

pub mod closure;
pub mod condense;
pub mod scc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::matrix::AdjacencyMatrix;

pub use closure::{Reachability, StrongConnectivity, strong_connectivity, warshall_closure};
pub use condense::{Condensation, build_condensation};
pub use scc::{Component, SccList, extract_sccs};

/// Every intermediate result of the connectivity pipeline for one matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectivityAnalysis {
    pub reachability: Reachability,
    pub strong: StrongConnectivity,
    pub components: SccList,
    pub condensation: Condensation,
}

impl ConnectivityAnalysis {
    /// Run closure, strong connectivity, SCC extraction, and condensation.
    #[must_use]
    #[instrument(skip(matrix), fields(n = matrix.size()))]
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let reachability = warshall_closure(matrix);
        let strong = reachability.strong_connectivity();
        let components = extract_sccs(&strong);
        let condensation = build_condensation(matrix, &components);

        debug!(
            sccs = components.len(),
            condensed_edges = condensation.edge_count(),
            "connectivity analysis complete"
        );

        Self {
            reachability,
            strong,
            components,
            condensation,
        }
    }

    #[must_use]
    pub fn scc_count(&self) -> usize {
        self.components.len()
    }

    /// Number of components with more than one member.
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_cycle()).count()
    }

    /// Index into `components` of the component holding `vertex`.
    #[must_use]
    pub fn scc_of(&self, vertex: usize) -> Option<usize> {
        self.components.iter().position(|c| c.contains(vertex))
    }

    /// `true` when the whole graph is one SCC (and non-empty).
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.components.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_cycle_and_tail() {
        // 0 ⇄ 1 → 2
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 0), (1, 2)]);
        let a = ConnectivityAnalysis::from_matrix(&m);

        assert_eq!(a.scc_count(), 2);
        assert_eq!(a.cycle_count(), 1);
        assert_eq!(a.scc_of(0), a.scc_of(1));
        assert_ne!(a.scc_of(0), a.scc_of(2));
        assert!(a.condensation.matrix.get(0, 1));
        assert!(!a.is_strongly_connected());
    }

    #[test]
    fn unknown_vertex_has_no_scc() {
        let a = ConnectivityAnalysis::from_matrix(&AdjacencyMatrix::empty(2));
        assert_eq!(a.scc_of(5), None);
    }
}
