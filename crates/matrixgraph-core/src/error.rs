//! Construction errors for matrices handed to the engine.
//!
//! The analysis functions themselves are total over validated input; these
//! errors only surface at the boundary where raw rows become an
//! [`AdjacencyMatrix`](crate::matrix::AdjacencyMatrix) or
//! [`WeightMatrix`](crate::matrix::WeightMatrix).

/// Reasons a set of rows cannot become a matrix the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A row's length differs from the number of rows.
    #[error("matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An adjacency entry other than 0 or 1.
    #[error("adjacency entry ({row}, {col}) is {value}, expected 0 or 1")]
    NonBinary { row: usize, col: usize, value: u8 },

    /// A weight matrix entry that differs from its mirror.
    #[error("weight matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    /// Adjacency and weight matrices describe different vertex counts.
    #[error("adjacency matrix has {adjacency} vertices but weight matrix has {weights}")]
    DimensionMismatch { adjacency: usize, weights: usize },

    /// Walk enumeration supports lengths 2 and 3 only.
    #[error("unsupported walk length {0}: only 2 and 3 are supported")]
    UnsupportedWalkLength(usize),
}
