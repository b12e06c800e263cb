//! Stepwise breadth- and depth-first traversal.
//!
//! # Overview
//!
//! [`TraversalEngine`] sweeps the whole matrix one [`TraversalEvent`] per
//! [`step`](TraversalEngine::step) call, so a renderer can replay the
//! algorithm one action at a time. All mutable state (the visited set, the
//! BFS queue or DFS stack, discovery order, renumbering, tree edges) lives
//! on the engine instance; nothing is shared between engines.
//!
//! # Sweep policy
//!
//! A component traversal is rooted at the lowest-index vertex that is still
//! unvisited and has at least one outgoing edge. When that component is
//! exhausted the engine picks the next such vertex and emits a fresh
//! [`TraversalEvent::StartComponent`]. The visited set is never cleared
//! between components. Vertices with no outgoing edges are never roots, so
//! a vertex with neither in- nor out-edges is never discovered.
//!
//! # Neighbor order
//!
//! Both strategies scan successors in ascending index order. DFS keeps an
//! explicit stack of `(node, next-neighbor cursor)` frames and resumes the
//! top frame's cursor on every step, descending into the first unvisited
//! successor it finds.
//!
//! ```rust
//! use matrixgraph_core::matrix::AdjacencyMatrix;
//! use matrixgraph_core::traverse::{TraversalEngine, TraversalKind};
//!
//! let m = AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (1, 3)]);
//! let mut dfs = TraversalEngine::new(m, TraversalKind::Dfs);
//! while dfs.step().is_some() {}
//! assert_eq!(dfs.discovery_order(), &[0, 1, 3, 2]);
//! ```

pub mod event;

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use fixedbitset::FixedBitSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::matrix::AdjacencyMatrix;

pub use event::TraversalEvent;

/// Which frontier discipline the engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        })
    }
}

/// Lifecycle of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalState {
    Ready,
    Running,
    Done,
}

/// A vertex whose successors are being scanned, and where to resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    node: usize,
    next: usize,
}

impl Frame {
    const fn new(node: usize) -> Self {
        Self { node, next: 0 }
    }

    /// Advance to the next successor of `node` at or after the cursor.
    fn next_successor(&mut self, matrix: &AdjacencyMatrix) -> Option<usize> {
        let found = (self.next..matrix.size()).find(|&v| matrix.get(self.node, v));
        self.next = found.map_or(matrix.size(), |v| v + 1);
        found
    }
}

/// Result of a finished sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalSummary {
    pub kind: TraversalKind,
    /// 0-based vertices in order of first discovery.
    pub discovery_order: Vec<usize>,
    /// `(old, new)` pairs, both 1-based, in discovery order.
    pub renumbering: Vec<(usize, usize)>,
    /// Adjacency matrix of the traversal forest.
    pub tree: AdjacencyMatrix,
    pub components: usize,
}

/// Externally driven BFS/DFS over every component of a matrix.
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    matrix: AdjacencyMatrix,
    kind: TraversalKind,
    state: TraversalState,
    visited: FixedBitSet,
    discovery_order: Vec<usize>,
    numbering: Vec<Option<usize>>,
    tree_edges: Vec<(usize, usize)>,
    queue: VecDeque<usize>,
    current: Option<Frame>,
    stack: Vec<Frame>,
    outbox: VecDeque<TraversalEvent>,
    components_started: usize,
}

impl TraversalEngine {
    /// A fresh engine in the `Ready` state.
    #[must_use]
    pub fn new(matrix: AdjacencyMatrix, kind: TraversalKind) -> Self {
        let n = matrix.size();
        Self {
            matrix,
            kind,
            state: TraversalState::Ready,
            visited: FixedBitSet::with_capacity(n),
            discovery_order: Vec::with_capacity(n),
            numbering: vec![None; n],
            tree_edges: Vec::new(),
            queue: VecDeque::new(),
            current: None,
            stack: Vec::new(),
            outbox: VecDeque::new(),
            components_started: 0,
        }
    }

    /// Produce the next event, or `None` once the sweep is complete.
    pub fn step(&mut self) -> Option<TraversalEvent> {
        match self.state {
            TraversalState::Done => return None,
            TraversalState::Ready => self.state = TraversalState::Running,
            TraversalState::Running => {}
        }

        loop {
            if let Some(event) = self.outbox.pop_front() {
                trace!(kind = %self.kind, ?event, "traversal step");
                return Some(event);
            }
            if !self.advance() {
                self.state = TraversalState::Done;
                debug!(
                    kind = %self.kind,
                    discovered = self.discovery_order.len(),
                    components = self.components_started,
                    "traversal sweep complete"
                );
                return None;
            }
        }
    }

    /// Step until the sweep completes and summarize it.
    pub fn run_to_completion(&mut self) -> TraversalSummary {
        while self.step().is_some() {}
        self.summary()
    }

    /// Snapshot of what has been discovered so far.
    #[must_use]
    pub fn summary(&self) -> TraversalSummary {
        TraversalSummary {
            kind: self.kind,
            discovery_order: self.discovery_order.clone(),
            renumbering: self.renumbering(),
            tree: self.tree_matrix(),
            components: self.components_started,
        }
    }

    /// Discard all progress and return to `Ready`. Events not yet produced
    /// are simply never produced.
    pub fn reset(&mut self) {
        self.state = TraversalState::Ready;
        self.visited.clear();
        self.discovery_order.clear();
        self.numbering.iter_mut().for_each(|slot| *slot = None);
        self.tree_edges.clear();
        self.queue.clear();
        self.current = None;
        self.stack.clear();
        self.outbox.clear();
        self.components_started = 0;
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub const fn kind(&self) -> TraversalKind {
        self.kind
    }

    #[must_use]
    pub const fn state(&self) -> TraversalState {
        self.state
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == TraversalState::Done
    }

    #[must_use]
    pub const fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    #[must_use]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.contains(vertex)
    }

    /// 0-based vertices in order of first discovery.
    #[must_use]
    pub fn discovery_order(&self) -> &[usize] {
        &self.discovery_order
    }

    /// For each original vertex, its 1-based discovery rank.
    #[must_use]
    pub fn new_numbering(&self) -> &[Option<usize>] {
        &self.numbering
    }

    /// `(old, new)` pairs, both 1-based, in discovery order.
    #[must_use]
    pub fn renumbering(&self) -> Vec<(usize, usize)> {
        self.discovery_order
            .iter()
            .enumerate()
            .map(|(rank, &v)| (v + 1, rank + 1))
            .collect()
    }

    /// Tree edges `(parent, child)` in discovery order.
    #[must_use]
    pub fn tree_edges(&self) -> &[(usize, usize)] {
        &self.tree_edges
    }

    /// The traversal forest as an `n × n` adjacency matrix.
    #[must_use]
    pub fn tree_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(self.matrix.size(), &self.tree_edges)
    }

    #[must_use]
    pub const fn components_started(&self) -> usize {
        self.components_started
    }

    // -----------------------------------------------------------------------
    // State machine
    // -----------------------------------------------------------------------

    /// Queue the events of the next atomic action. Returns `false` when no
    /// action remains in any component.
    fn advance(&mut self) -> bool {
        let progressed = match self.kind {
            TraversalKind::Bfs => self.advance_bfs(),
            TraversalKind::Dfs => self.advance_dfs(),
        };
        if progressed {
            return true;
        }
        match self.next_root() {
            Some(root) => {
                self.start_component(root);
                true
            }
            None => false,
        }
    }

    fn advance_bfs(&mut self) -> bool {
        let scan = self
            .current
            .as_mut()
            .map(|frame| (frame.node, frame.next_successor(&self.matrix)));

        match scan {
            Some((u, Some(v))) => {
                if self.visited.contains(v) {
                    self.emit(TraversalEvent::AlreadyKnown { from: u, to: v });
                } else {
                    self.discover(v, Some(u));
                    self.queue.push_back(v);
                }
                true
            }
            Some((u, None)) => {
                self.current = None;
                self.emit(TraversalEvent::ProcessFinish { node: u });
                true
            }
            None => match self.queue.pop_front() {
                Some(u) => {
                    self.current = Some(Frame::new(u));
                    self.emit(TraversalEvent::ProcessStart { node: u });
                    true
                }
                None => false,
            },
        }
    }

    fn advance_dfs(&mut self) -> bool {
        let scan = self
            .stack
            .last_mut()
            .map(|frame| (frame.node, frame.next_successor(&self.matrix)));

        match scan {
            Some((u, Some(v))) => {
                if self.visited.contains(v) {
                    self.emit(TraversalEvent::AlreadyKnown { from: u, to: v });
                } else {
                    self.discover(v, Some(u));
                    self.stack.push(Frame::new(v));
                    self.emit(TraversalEvent::ProcessStart { node: v });
                }
                true
            }
            Some((u, None)) => {
                self.stack.pop();
                self.emit(TraversalEvent::ProcessFinish { node: u });
                true
            }
            None => false,
        }
    }

    fn next_root(&self) -> Option<usize> {
        (0..self.matrix.size())
            .find(|&v| !self.visited.contains(v) && self.matrix.row_sum(v) > 0)
    }

    fn start_component(&mut self, root: usize) {
        self.components_started += 1;
        debug!(kind = %self.kind, root, component = self.components_started, "starting component");

        self.emit(TraversalEvent::StartComponent { root });
        self.discover(root, None);
        match self.kind {
            TraversalKind::Bfs => self.queue.push_back(root),
            TraversalKind::Dfs => {
                self.stack.push(Frame::new(root));
                self.emit(TraversalEvent::ProcessStart { node: root });
            }
        }
    }

    fn discover(&mut self, node: usize, parent: Option<usize>) {
        self.visited.insert(node);
        if self.numbering[node].is_none() {
            self.discovery_order.push(node);
            self.numbering[node] = Some(self.discovery_order.len());
        }
        if let Some(parent) = parent {
            self.tree_edges.push((parent, node));
        }
        self.emit(TraversalEvent::Discover { node, parent });
    }

    fn emit(&mut self, event: TraversalEvent) {
        self.outbox.push_back(event);
    }
}

impl Iterator for TraversalEngine {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        self.step()
    }
}

impl FusedIterator for TraversalEngine {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
