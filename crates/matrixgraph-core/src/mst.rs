//! Stepwise Kruskal: minimum spanning forest one edge at a time.
//!
//! # Overview
//!
//! [`SpanningForest`] sorts every positive-weight edge by `(weight, u, v)`
//! and then waits to be driven. Each [`SpanningForest::step`] considers
//! exactly one edge: it is accepted when its endpoints are still in
//! different [`DisjointSet`] components, rejected otherwise. A caller
//! rendering the algorithm reads [`SpanningForest::last_considered`] after
//! every step to highlight the edge just examined.
//!
//! # States
//!
//! ```text
//! Ready ──step()──▶ Stepping ──step()…──▶ Done
//! ```
//!
//! The engine is done when every edge was considered or `n - 1` edges were
//! accepted. If the edges run out first the positive-weight graph is
//! disconnected and the result is a forest, which
//! [`ForestSummary::is_spanning_tree`] reports as `false`. That is a normal
//! outcome, not an error.

use serde::Serialize;
use tracing::debug;

use crate::dsu::DisjointSet;
use crate::matrix::{WeightMatrix, WeightedEdge};

/// Lifecycle of a [`SpanningForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForestState {
    Ready,
    Stepping,
    Done,
}

/// Outcome of considering one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    /// Endpoints were already connected; the edge would close a cycle.
    Rejected,
}

/// The edge examined by the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsideredEdge {
    pub edge: WeightedEdge,
    pub verdict: Verdict,
}

/// Final (or current) result of the spanning-forest computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForestSummary {
    /// Accepted edges in acceptance order.
    pub edges: Vec<WeightedEdge>,
    pub total_weight: u64,
    /// Connected components spanned by the accepted edges.
    pub component_count: usize,
    /// `true` when the accepted edges connect every vertex.
    pub is_spanning_tree: bool,
}

/// Kruskal's algorithm as an externally driven state machine.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
    cursor: usize,
    dsu: DisjointSet,
    accepted: Vec<WeightedEdge>,
    rejected: Vec<WeightedEdge>,
    total_weight: u64,
    last_considered: Option<ConsideredEdge>,
}

impl SpanningForest {
    /// Prepare Kruskal over `edges` on `vertex_count` vertices.
    ///
    /// Edges with weight 0 are discarded; the rest are sorted by
    /// `(weight, u, v)` regardless of input order.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint is not in `0..vertex_count`.
    #[must_use]
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = WeightedEdge>) -> Self {
        let mut edges: Vec<_> = edges.into_iter().filter(|e| e.weight > 0).collect();
        for e in &edges {
            assert!(
                e.u < vertex_count && e.v < vertex_count,
                "edge ({}, {}) out of range for {vertex_count} vertices",
                e.u,
                e.v
            );
        }
        edges.sort_unstable();
        debug!(vertex_count, edges = edges.len(), "spanning forest prepared");

        Self {
            vertex_count,
            edges,
            cursor: 0,
            dsu: DisjointSet::new(vertex_count),
            accepted: Vec::new(),
            rejected: Vec::new(),
            total_weight: 0,
            last_considered: None,
        }
    }

    /// Prepare Kruskal over the upper triangle of a weight matrix.
    #[must_use]
    pub fn from_weights(weights: &WeightMatrix) -> Self {
        Self::from_edges(weights.size(), weights.edges())
    }

    /// Whether no further step can change the result.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.edges.len()
            || (self.vertex_count > 0 && self.accepted.len() == self.vertex_count - 1)
    }

    #[must_use]
    pub fn state(&self) -> ForestState {
        if self.is_done() {
            ForestState::Done
        } else if self.cursor == 0 {
            ForestState::Ready
        } else {
            ForestState::Stepping
        }
    }

    /// Consider the next edge. Returns `false` (and clears
    /// [`last_considered`](Self::last_considered)) when already done.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            self.last_considered = None;
            return false;
        }

        let edge = self.edges[self.cursor];
        self.cursor += 1;

        let verdict = if self.dsu.union(edge.u, edge.v) {
            self.accepted.push(edge);
            self.total_weight += u64::from(edge.weight);
            Verdict::Accepted
        } else {
            self.rejected.push(edge);
            Verdict::Rejected
        };
        debug!(
            u = edge.u,
            v = edge.v,
            weight = edge.weight,
            ?verdict,
            total = self.total_weight,
            "kruskal step"
        );

        self.last_considered = Some(ConsideredEdge { edge, verdict });
        true
    }

    /// Step until done and return the summary.
    pub fn run_to_completion(&mut self) -> ForestSummary {
        while self.step() {}
        self.summary()
    }

    /// Snapshot of the accepted edges so far.
    #[must_use]
    pub fn summary(&self) -> ForestSummary {
        let component_count = self.vertex_count - self.accepted.len();
        ForestSummary {
            edges: self.accepted.clone(),
            total_weight: self.total_weight,
            component_count,
            is_spanning_tree: component_count <= 1,
        }
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Accepted edges in acceptance order.
    #[must_use]
    pub fn mst_edges(&self) -> &[WeightedEdge] {
        &self.accepted
    }

    /// Edges rejected because they would have closed a cycle.
    #[must_use]
    pub fn rejected_edges(&self) -> &[WeightedEdge] {
        &self.rejected
    }

    /// Sorted edges not yet considered.
    #[must_use]
    pub fn pending_edges(&self) -> &[WeightedEdge] {
        &self.edges[self.cursor..]
    }

    /// Every candidate edge in processing order.
    #[must_use]
    pub fn sorted_edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    #[must_use]
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    #[must_use]
    pub const fn last_considered(&self) -> Option<ConsideredEdge> {
        self.last_considered
    }
}
