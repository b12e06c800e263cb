//! Command handlers for `mg`.
//!
//! Every analysis command receives its matrix the same way: generated from
//! a seed (flags override `[generator]` in the config file) or read with
//! `--input` from a JSON file holding a list of 0/1 rows.

pub mod completions;
pub mod degrees;
pub mod generate;
pub mod mst;
pub mod paths;
pub mod reach;
pub mod traverse;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use matrixgraph_core::generate::random_directed;
use matrixgraph_core::matrix::AdjacencyMatrix;
use tracing::info;

use crate::config::{Config, GeneratorSection};
use crate::output::OutputMode;

/// Per-invocation state shared by all handlers.
#[derive(Debug)]
pub struct CommandContext {
    pub output: OutputMode,
    pub config: Config,
}

/// Where the directed adjacency matrix comes from.
#[derive(Args, Debug, Default, Clone)]
pub struct MatrixSource {
    /// Read the matrix from a JSON file: a list of 0/1 rows.
    #[arg(long, short = 'i', value_name = "PATH", conflicts_with_all = ["vertices", "seed", "coefficient"])]
    pub input: Option<PathBuf>,

    /// Number of vertices to generate.
    #[arg(long, short = 'n')]
    pub vertices: Option<usize>,

    /// Generator seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Edge density coefficient; samples in [0, 2) times this must reach 1.0.
    #[arg(long)]
    pub coefficient: Option<f64>,
}

impl MatrixSource {
    /// Generator settings after applying flag overrides to the config.
    pub fn generator(&self, config: &Config) -> GeneratorSection {
        let mut section = config.generator.clone();
        if let Some(n) = self.vertices {
            section.vertex_count = n;
        }
        if let Some(seed) = self.seed {
            section.seed = seed;
        }
        if let Some(k) = self.coefficient {
            section.coefficient = k;
        }
        section
    }

    /// Load or generate the directed matrix.
    pub fn load(&self, config: &Config) -> Result<AdjacencyMatrix> {
        if let Some(path) = &self.input {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let rows: Vec<Vec<u8>> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            let matrix = AdjacencyMatrix::from_rows(rows)
                .with_context(|| format!("Invalid matrix in {}", path.display()))?;
            info!(path = %path.display(), n = matrix.size(), "matrix loaded");
            return Ok(matrix);
        }

        let section = self.generator(config);
        let matrix = random_directed(&section.generator_config());
        info!(
            n = section.vertex_count,
            seed = section.seed,
            coefficient = section.coefficient,
            "matrix generated"
        );
        Ok(matrix)
    }
}
