//! Vertex degrees, regularity, and special vertices.
//!
//! # Conventions
//!
//! - **Undirected degree** is the row sum, plus one more when the vertex has
//!   a self-loop, so a loop counts twice (handshake convention).
//! - **Directed degrees** are the row sum (out) and column sum (in).
//! - Vertex ids in [`SpecialVertices`] are 1-based, matching how results are
//!   presented to users. Degree vectors stay 0-indexed by position.

use serde::Serialize;

use crate::matrix::AdjacencyMatrix;

// ---------------------------------------------------------------------------
// Degree vectors
// ---------------------------------------------------------------------------

/// Degree of every vertex of an undirected (symmetric) matrix.
#[must_use]
pub fn undirected_degrees(matrix: &AdjacencyMatrix) -> Vec<usize> {
    (0..matrix.size())
        .map(|i| matrix.row_sum(i) + usize::from(matrix.has_loop(i)))
        .collect()
}

/// Out- and in-degrees of a directed matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedDegrees {
    /// `out_degree[i]` = sum of row `i`.
    pub out_degree: Vec<usize>,
    /// `in_degree[i]` = sum of column `i`.
    pub in_degree: Vec<usize>,
}

impl DirectedDegrees {
    /// Per-vertex `out + in`.
    #[must_use]
    pub fn total(&self) -> Vec<usize> {
        total_degrees(&self.out_degree, &self.in_degree)
    }
}

/// Row and column sums of a directed matrix.
#[must_use]
pub fn directed_degrees(matrix: &AdjacencyMatrix) -> DirectedDegrees {
    let n = matrix.size();
    DirectedDegrees {
        out_degree: (0..n).map(|i| matrix.row_sum(i)).collect(),
        in_degree: (0..n).map(|j| matrix.column_sum(j)).collect(),
    }
}

/// Per-vertex sum of out- and in-degree.
///
/// # Panics
///
/// Panics if the two slices differ in length.
#[must_use]
pub fn total_degrees(out_degree: &[usize], in_degree: &[usize]) -> Vec<usize> {
    assert_eq!(
        out_degree.len(),
        in_degree.len(),
        "out/in degree vectors differ in length"
    );
    out_degree
        .iter()
        .zip(in_degree)
        .map(|(out, inc)| out + inc)
        .collect()
}

// ---------------------------------------------------------------------------
// Regularity
// ---------------------------------------------------------------------------

/// Whether every vertex shares one degree, and which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Regularity {
    pub is_regular: bool,
    /// The common degree when regular, otherwise 0.
    pub degree: usize,
}

impl Regularity {
    const IRREGULAR: Self = Self {
        is_regular: false,
        degree: 0,
    };

    const fn regular(degree: usize) -> Self {
        Self {
            is_regular: true,
            degree,
        }
    }
}

fn common_value(values: &[usize]) -> Option<usize> {
    let (&first, rest) = values.split_first()?;
    rest.iter().all(|&d| d == first).then_some(first)
}

/// Regularity of an undirected degree vector. An empty graph is not regular.
#[must_use]
pub fn is_regular(degrees: &[usize]) -> Regularity {
    common_value(degrees).map_or(Regularity::IRREGULAR, Regularity::regular)
}

/// A directed graph is regular when all out-degrees are equal, all
/// in-degrees are equal, and the two common values match.
#[must_use]
pub fn is_regular_directed(out_degree: &[usize], in_degree: &[usize]) -> Regularity {
    if out_degree.len() != in_degree.len() {
        return Regularity::IRREGULAR;
    }
    match (common_value(out_degree), common_value(in_degree)) {
        (Some(out), Some(inc)) if out == inc => Regularity::regular(out),
        _ => Regularity::IRREGULAR,
    }
}

// ---------------------------------------------------------------------------
// Special vertices
// ---------------------------------------------------------------------------

/// Pendant and isolated vertices, 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecialVertices {
    pub pendant: Vec<usize>,
    pub isolated: Vec<usize>,
}

/// Pendant vertices have degree 1, isolated vertices degree 0.
#[must_use]
pub fn special_vertices_undirected(degrees: &[usize]) -> SpecialVertices {
    let with_degree = |target: usize| {
        degrees
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == target)
            .map(|(i, _)| i + 1)
            .collect()
    };
    SpecialVertices {
        pendant: with_degree(1),
        isolated: with_degree(0),
    }
}

/// Pendant: `out + in == 1`. Isolated: `out == 0 && in == 0`.
#[must_use]
pub fn special_vertices_directed(out_degree: &[usize], in_degree: &[usize]) -> SpecialVertices {
    let mut special = SpecialVertices::default();
    for (i, (&out, &inc)) in out_degree.iter().zip(in_degree).enumerate() {
        if out + inc == 1 {
            special.pendant.push(i + 1);
        }
        if out == 0 && inc == 0 {
            special.isolated.push(i + 1);
        }
    }
    special
}

// ---------------------------------------------------------------------------
// DegreeReport
// ---------------------------------------------------------------------------

/// Everything the degree analysis reports for one matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegreeReport {
    Undirected {
        degrees: Vec<usize>,
        regularity: Regularity,
        special: SpecialVertices,
    },
    Directed {
        degrees: DirectedDegrees,
        total: Vec<usize>,
        regularity: Regularity,
        special: SpecialVertices,
    },
}

impl DegreeReport {
    /// Analyze `matrix` as an undirected graph.
    #[must_use]
    pub fn undirected(matrix: &AdjacencyMatrix) -> Self {
        let degrees = undirected_degrees(matrix);
        let regularity = is_regular(&degrees);
        let special = special_vertices_undirected(&degrees);
        Self::Undirected {
            degrees,
            regularity,
            special,
        }
    }

    /// Analyze `matrix` as a directed graph.
    #[must_use]
    pub fn directed(matrix: &AdjacencyMatrix) -> Self {
        let degrees = directed_degrees(matrix);
        let total = degrees.total();
        let regularity = is_regular_directed(&degrees.out_degree, &degrees.in_degree);
        let special = special_vertices_directed(&degrees.out_degree, &degrees.in_degree);
        Self::Directed {
            degrees,
            total,
            regularity,
            special,
        }
    }

    #[must_use]
    pub const fn regularity(&self) -> Regularity {
        match self {
            Self::Undirected { regularity, .. } | Self::Directed { regularity, .. } => *regularity,
        }
    }

    #[must_use]
    pub const fn special(&self) -> &SpecialVertices {
        match self {
            Self::Undirected { special, .. } | Self::Directed { special, .. } => special,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_counts_twice() {
        // 0 - 1, loop on 2
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 0), (2, 2)]);
        assert_eq!(undirected_degrees(&m), vec![1, 1, 2]);
    }

    #[test]
    fn directed_degrees_are_row_and_column_sums() {
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
        let d = directed_degrees(&m);
        assert_eq!(d.out_degree, vec![2, 1, 0]);
        assert_eq!(d.in_degree, vec![0, 1, 2]);
        assert_eq!(d.total(), vec![2, 2, 2]);
    }

    #[test]
    fn regular_cycle() {
        let r = is_regular(&[2, 2, 2]);
        assert!(r.is_regular);
        assert_eq!(r.degree, 2);
    }

    #[test]
    fn irregular_reports_zero() {
        let r = is_regular(&[2, 1, 2]);
        assert!(!r.is_regular);
        assert_eq!(r.degree, 0);
    }

    #[test]
    fn empty_degrees_not_regular() {
        assert_eq!(is_regular(&[]), Regularity::IRREGULAR);
        assert_eq!(is_regular_directed(&[], &[]), Regularity::IRREGULAR);
    }

    #[test]
    fn directed_regular_needs_matching_out_and_in() {
        // Directed 3-cycle: out = in = 1 everywhere.
        let cycle = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let d = directed_degrees(&cycle);
        assert_eq!(
            is_regular_directed(&d.out_degree, &d.in_degree),
            Regularity::regular(1)
        );

        // Uniform out and uniform in, but different values.
        assert_eq!(is_regular_directed(&[2, 2], &[1, 1]), Regularity::IRREGULAR);
    }

    #[test]
    fn special_vertices_undirected_are_one_based() {
        let s = special_vertices_undirected(&[1, 0, 3, 1]);
        assert_eq!(s.pendant, vec![1, 4]);
        assert_eq!(s.isolated, vec![2]);
    }

    #[test]
    fn special_vertices_directed() {
        // 0 → 1, vertex 2 untouched
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1)]);
        let d = directed_degrees(&m);
        let s = super::special_vertices_directed(&d.out_degree, &d.in_degree);
        assert_eq!(s.pendant, vec![1, 2]);
        assert_eq!(s.isolated, vec![3]);
    }

    #[test]
    fn report_bundles_results() {
        let m = AdjacencyMatrix::from_edges(2, &[(0, 1), (1, 0)]);
        let report = DegreeReport::undirected(&m);
        assert!(report.regularity().is_regular);
        assert_eq!(report.special().pendant, vec![1, 2]);

        let report = DegreeReport::directed(&m);
        assert_eq!(report.regularity().degree, 1);
    }

    #[test]
    fn empty_matrix_yields_empty_results() {
        let m = AdjacencyMatrix::empty(0);
        assert!(undirected_degrees(&m).is_empty());
        let d = directed_degrees(&m);
        assert!(d.out_degree.is_empty() && d.in_degree.is_empty());
        assert_eq!(special_vertices_undirected(&[]), SpecialVertices::default());
    }
}
