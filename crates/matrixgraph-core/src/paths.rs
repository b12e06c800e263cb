//! Enumeration of fixed-length walks.
//!
//! A *walk* of length `L` is a vertex sequence `v0, v1, …, vL` where every
//! consecutive pair is an edge. Vertices may repeat, so `0 → 1 → 0` is a
//! valid length-2 walk through a 2-cycle, and self-loops contribute walks
//! like `2 → 2 → 2`.
//!
//! [`Walks`] generates them lazily in lexicographic order of the vertex
//! tuple, exactly as nested ascending loops over start, intermediates, and
//! end would. Generation costs `O(n^(L+1))` in the worst case.

use std::fmt;

use serde::Serialize;

use crate::error::MatrixError;
use crate::matrix::AdjacencyMatrix;

/// Supported walk lengths, in edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WalkLength {
    Two,
    Three,
}

impl WalkLength {
    /// Number of edges.
    #[must_use]
    pub const fn edges(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<usize> for WalkLength {
    type Error = MatrixError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        match len {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(MatrixError::UnsupportedWalkLength(other)),
        }
    }
}

/// One walk as 0-based vertex indices. Displays 1-based: `1 -> 2 -> 3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Walk(pub Vec<usize>);

impl Walk {
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, v) in self.0.iter().enumerate() {
            if pos > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", v + 1)?;
        }
        Ok(())
    }
}

/// Lazy iterator over every walk of a given length.
///
/// Holds a cursor per position; the walk under construction is extended
/// with the next successor at or after that position's cursor, and
/// backtracks when a position runs out of candidates.
#[derive(Debug, Clone)]
pub struct Walks<'a> {
    matrix: &'a AdjacencyMatrix,
    target: usize,
    path: Vec<usize>,
    cursors: Vec<usize>,
}

impl<'a> Walks<'a> {
    fn new(matrix: &'a AdjacencyMatrix, length: WalkLength) -> Self {
        let target = length.edges() + 1;
        Self {
            matrix,
            target,
            path: Vec::with_capacity(target),
            cursors: vec![0; target],
        }
    }

    fn next_candidate(&self, depth: usize) -> Option<usize> {
        let n = self.matrix.size();
        let from = self.cursors[depth];
        match self.path.last() {
            None => (from < n).then_some(from),
            Some(&prev) => (from..n).find(|&v| self.matrix.get(prev, v)),
        }
    }
}

impl Iterator for Walks<'_> {
    type Item = Walk;

    fn next(&mut self) -> Option<Walk> {
        loop {
            let depth = self.path.len();
            if depth == self.target {
                let walk = Walk(self.path.clone());
                self.path.pop();
                return Some(walk);
            }
            if let Some(v) = self.next_candidate(depth) {
                self.cursors[depth] = v + 1;
                self.path.push(v);
                if depth + 1 < self.target {
                    self.cursors[depth + 1] = 0;
                }
            } else {
                if depth == 0 {
                    return None;
                }
                self.path.pop();
            }
        }
    }
}

/// All walks of exactly `length` edges, lexicographically ordered.
///
/// Calling this again restarts enumeration from the beginning.
#[must_use]
pub fn paths_of_length(matrix: &AdjacencyMatrix, length: WalkLength) -> Walks<'_> {
    Walks::new(matrix, length)
}

/// Number of walks of exactly `length` edges.
#[must_use]
pub fn count_walks(matrix: &AdjacencyMatrix, length: WalkLength) -> usize {
    paths_of_length(matrix, length).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
