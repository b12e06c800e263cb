//! Dense square matrices the engine analyzes.
//!
//! # Overview
//!
//! [`AdjacencyMatrix`] is an `n × n` 0/1 matrix: `M[i][j] == 1` means an
//! edge `i → j`, and a 1 on the diagonal is a self-loop. Whether the graph is
//! directed or undirected is a usage convention; undirected matrices are
//! expected to be symmetric but the engine never checks.
//!
//! [`WeightMatrix`] is the companion `n × n` matrix of non-negative integer
//! weights used by the spanning-forest engine. Zero means "no edge".
//!
//! Both types validate shape once, in `from_rows`. Everything downstream
//! treats the dimension invariant `rows == cols == n` as given and panics on
//! out-of-range indices.
//!
//! # Serialization
//!
//! Both matrices serialize as a list of rows and deserialize through the
//! same validation as `from_rows`, so a malformed JSON matrix is rejected
//! with a [`MatrixError`] message.

#![allow(clippy::module_name_repetitions)]

use petgraph::graph::{DiGraph, UnGraph};
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

// ---------------------------------------------------------------------------
// AdjacencyMatrix
// ---------------------------------------------------------------------------

/// Square boolean matrix of direct edges, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// An `n × n` matrix with no edges.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Build a matrix from 0/1 rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row length differs from the
    /// row count, or [`MatrixError::NonBinary`] for entries other than 0/1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: n,
                    actual: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(MatrixError::NonBinary { row, col, value }),
                }
            }
        }
        Ok(Self { n, cells })
    }

    /// Build an `n × n` matrix with the given directed edges set.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not in `0..n`.
    #[must_use]
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = Self::empty(n);
        for &(u, v) in edges {
            matrix.set(u, v, true);
        }
        matrix
    }

    /// Number of vertices.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    /// `true` for the 0 × 0 matrix.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.n && j < self.n,
            "vertex ({i}, {j}) out of range for {n}x{n} matrix",
            n = self.n
        );
        i * self.n + j
    }

    /// Whether the edge `i → j` exists.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not in `0..n`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[self.index(i, j)]
    }

    /// Set or clear the edge `i → j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not in `0..n`.
    pub fn set(&mut self, i: usize, j: usize, present: bool) {
        let idx = self.index(i, j);
        self.cells[idx] = present;
    }

    /// Row `i` as a slice of flags.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `0..n`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[bool] {
        assert!(i < self.n, "row {i} out of range for {n}x{n} matrix", n = self.n);
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Direct successors of `i` in ascending index order.
    pub fn successors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(i)
            .iter()
            .enumerate()
            .filter_map(|(j, &present)| present.then_some(j))
    }

    /// Whether vertex `i` carries a self-loop.
    #[must_use]
    pub fn has_loop(&self, i: usize) -> bool {
        self.get(i, i)
    }

    /// Sum of row `i`.
    #[must_use]
    pub fn row_sum(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&present| present).count()
    }

    /// Sum of column `j`.
    #[must_use]
    pub fn column_sum(&self, j: usize) -> usize {
        (0..self.n).filter(|&i| self.get(i, j)).count()
    }

    /// Number of 1-entries in the whole matrix.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&present| present).count()
    }

    /// The matrix as 0/1 rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.n)
            .map(|i| self.row(i).iter().map(|&present| u8::from(present)).collect())
            .collect()
    }

    /// Undirected version keeping self-loops: `U[i][j] = M[i][j] | M[j][i]`.
    #[must_use]
    pub fn symmetrized(&self) -> Self {
        let mut out = Self::empty(self.n);
        for i in 0..self.n {
            for j in i..self.n {
                if self.get(i, j) || self.get(j, i) {
                    out.set(i, j, true);
                    out.set(j, i, true);
                }
            }
        }
        out
    }

    /// Undirected version with the diagonal cleared.
    #[must_use]
    pub fn symmetrized_without_loops(&self) -> Self {
        let mut out = self.symmetrized();
        for i in 0..self.n {
            out.set(i, i, false);
        }
        out
    }

    /// Export as a `petgraph` directed graph whose node weights are the
    /// 0-based vertex indices.
    #[must_use]
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.n, self.edge_count());
        let nodes: Vec<_> = (0..self.n).map(|i| graph.add_node(i)).collect();
        for u in 0..self.n {
            for v in self.successors(u) {
                graph.add_edge(nodes[u], nodes[v], ());
            }
        }
        graph
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u8>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.to_rows()
    }
}

impl TryFrom<Vec<Vec<u8>>> for AdjacencyMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

// ---------------------------------------------------------------------------
// WeightedEdge
// ---------------------------------------------------------------------------

/// An undirected edge `u - v` with a positive weight.
///
/// Field order makes the derived `Ord` compare `(weight, u, v)`, which is the
/// processing order of the spanning-forest engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub weight: u32,
    pub u: usize,
    pub v: usize,
}

impl WeightedEdge {
    #[must_use]
    pub const fn new(weight: u32, u: usize, v: usize) -> Self {
        Self { weight, u, v }
    }
}

// ---------------------------------------------------------------------------
// WeightMatrix
// ---------------------------------------------------------------------------

/// Symmetric `n × n` matrix of non-negative edge weights (0 = no edge).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u32>>", try_from = "Vec<Vec<u32>>")]
pub struct WeightMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl WeightMatrix {
    /// An `n × n` matrix of zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Build a weight matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for ragged input and
    /// [`MatrixError::Asymmetric`] at the first `(i, j)` with
    /// `W[i][j] != W[j][i]`.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: n,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        for row in 0..n {
            for col in row + 1..n {
                if cells[row * n + col] != cells[col * n + row] {
                    return Err(MatrixError::Asymmetric { row, col });
                }
            }
        }
        Ok(Self { n, cells })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.n && j < self.n,
            "vertex ({i}, {j}) out of range for {n}x{n} weight matrix",
            n = self.n
        );
        i * self.n + j
    }

    /// Weight of the edge between `i` and `j` (0 if absent).
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not in `0..n`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[self.index(i, j)]
    }

    /// Set `W[i][j]` and `W[j][i]` together.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not in `0..n`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, weight: u32) {
        let a = self.index(i, j);
        let b = self.index(j, i);
        self.cells[a] = weight;
        self.cells[b] = weight;
    }

    /// Edges with positive weight from the upper triangle (`u < v`), in
    /// row-major order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.n).flat_map(move |u| {
            (u + 1..self.n).filter_map(move |v| {
                let weight = self.get(u, v);
                (weight > 0).then_some(WeightedEdge::new(weight, u, v))
            })
        })
    }

    /// Confirm this matrix pairs with `adjacency`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when the vertex counts
    /// differ.
    pub const fn check_matches(&self, adjacency: &AdjacencyMatrix) -> Result<(), MatrixError> {
        if self.n == adjacency.size() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                adjacency: adjacency.size(),
                weights: self.n,
            })
        }
    }

    /// The matrix as rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.n.max(1)).take(self.n).map(<[u32]>::to_vec).collect()
    }

    /// Export as a `petgraph` undirected graph with one edge per positive
    /// upper-triangle entry.
    #[must_use]
    pub fn to_ungraph(&self) -> UnGraph<usize, u32> {
        let mut graph = UnGraph::with_capacity(self.n, 0);
        let nodes: Vec<_> = (0..self.n).map(|i| graph.add_node(i)).collect();
        for edge in self.edges() {
            graph.add_edge(nodes[edge.u], nodes[edge.v], edge.weight);
        }
        graph
    }
}

impl From<WeightMatrix> for Vec<Vec<u32>> {
    fn from(matrix: WeightMatrix) -> Self {
        matrix.to_rows()
    }
}

impl TryFrom<Vec<Vec<u32>>> for WeightMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
