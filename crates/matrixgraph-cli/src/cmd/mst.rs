//! `mg mst`: stepwise Kruskal over the weighted undirected graph.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use matrixgraph_core::generate::random_weights;
use matrixgraph_core::matrix::{WeightMatrix, WeightedEdge};
use matrixgraph_core::mst::{ConsideredEdge, ForestSummary, SpanningForest, Verdict};
use serde::Serialize;
use tracing::info;

use super::{CommandContext, MatrixSource};
use crate::output::{pretty_kv, pretty_section, render_mode, write_weights};

/// Arguments for `mg mst`.
#[derive(Args, Debug, Default)]
pub struct MstArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Read the weight matrix from a JSON file instead of generating it.
    #[arg(long, short = 'w', value_name = "PATH")]
    pub weights: Option<PathBuf>,

    /// Seed for generated weights (defaults to `weight_seed`, then `seed`).
    #[arg(long, conflicts_with = "weights")]
    pub weight_seed: Option<u64>,

    /// Print every considered edge with its verdict.
    #[arg(long)]
    pub steps: bool,
}

/// Report payload for `mg mst`.
#[derive(Debug, Serialize)]
pub struct MstOutput {
    pub weights: WeightMatrix,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ConsideredEdge>,
    pub forest: ForestSummary,
}

fn edge_text(e: &WeightedEdge) -> String {
    format!("{}-{} (w={})", e.u + 1, e.v + 1, e.weight)
}

const fn verdict_text(v: Verdict) -> &'static str {
    match v {
        Verdict::Accepted => "accepted",
        Verdict::Rejected => "rejected",
    }
}

/// Run Kruskal over `weights`, recording each step when asked.
pub fn mst_output(weights: WeightMatrix, record_steps: bool) -> MstOutput {
    let mut forest = SpanningForest::from_weights(&weights);
    let mut steps = Vec::new();
    while forest.step() {
        if record_steps {
            steps.extend(forest.last_considered());
        }
    }
    MstOutput {
        forest: forest.summary(),
        steps,
        weights,
    }
}

fn load_weights(path: &Path) -> anyhow::Result<WeightMatrix> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rows: Vec<Vec<u32>> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    WeightMatrix::from_rows(rows).with_context(|| format!("Invalid weights in {}", path.display()))
}

fn write_output(w: &mut dyn Write, out: &MstOutput, pretty: bool) -> io::Result<()> {
    if pretty {
        pretty_section(w, "Weights")?;
        write_weights(w, &out.weights, true)?;
        writeln!(w)?;
    }

    if !out.steps.is_empty() {
        if pretty {
            pretty_section(w, "Steps")?;
        }
        let mut running = 0_u64;
        for (i, step) in out.steps.iter().enumerate() {
            if step.verdict == Verdict::Accepted {
                running += u64::from(step.edge.weight);
            }
            writeln!(
                w,
                "{:>3}. {} {} total={running}",
                i + 1,
                edge_text(&step.edge),
                verdict_text(step.verdict)
            )?;
        }
        writeln!(w)?;
    }

    let forest = &out.forest;
    if pretty {
        pretty_section(w, "Spanning forest")?;
        for e in &forest.edges {
            writeln!(w, "  {}", edge_text(e))?;
        }
        pretty_kv(w, "total weight", forest.total_weight.to_string())?;
        pretty_kv(w, "components", forest.component_count.to_string())?;
        pretty_kv(w, "spanning tree", forest.is_spanning_tree.to_string())
    } else {
        for e in &forest.edges {
            writeln!(w, "{}", edge_text(e))?;
        }
        writeln!(w, "total {}", forest.total_weight)?;
        writeln!(w, "components {}", forest.component_count)
    }
}

/// Execute `mg mst`.
pub fn run_mst(args: &MstArgs, ctx: &CommandContext) -> anyhow::Result<()> {
    let undirected = args.source.load(&ctx.config)?.symmetrized_without_loops();

    let weights = if let Some(path) = &args.weights {
        let weights = load_weights(path)?;
        weights
            .check_matches(&undirected)
            .context("weight matrix does not fit the adjacency matrix")?;
        weights
    } else {
        let seed = args
            .weight_seed
            .unwrap_or_else(|| args.source.generator(&ctx.config).effective_weight_seed());
        info!(seed, "generating weights");
        random_weights(&undirected, seed)
    };

    let out = mst_output(weights, args.steps);
    render_mode(
        ctx.output,
        &out,
        |o, w| write_output(w, o, false),
        |o, w| write_output(w, o, true),
    )
}
