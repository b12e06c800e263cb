#![forbid(unsafe_code)]
//! matrixgraph-core library.
//!
//! Analysis engine for graphs given as dense `n × n` adjacency matrices:
//! degrees and regularity ([`degree`]), fixed-length walks ([`paths`]),
//! transitive closure, SCCs and condensation ([`reach`]), stepwise Kruskal
//! over a weight matrix ([`mst`], backed by [`dsu`]), and stepwise BFS/DFS
//! ([`traverse`]). [`generate`] produces seeded random inputs.
//!
//! # Conventions
//!
//! - **Indices**: vertices are 0-based everywhere in the API. User-facing
//!   renderings (labels, `Display` impls, special-vertex lists) are 1-based.
//! - **Errors**: Matrix construction returns [`MatrixError`]. Analysis
//!   functions are total over validated matrices; out-of-range indices are
//!   caller bugs and panic.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`). The library
//!   never installs a subscriber.
//! - **Stepping**: [`mst::SpanningForest`] and [`traverse::TraversalEngine`]
//!   do nothing until `step()` is called; each call performs one observable
//!   action and all state between calls lives on the instance.

pub mod degree;
pub mod dsu;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod mst;
pub mod paths;
pub mod reach;
pub mod traverse;

pub use error::MatrixError;
pub use matrix::{AdjacencyMatrix, WeightMatrix, WeightedEdge};
