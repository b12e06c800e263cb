//! `mg traverse`: stepwise BFS/DFS with renumbering and the traversal forest.

use std::io::{self, Write};

use clap::{Args, ValueEnum};
use matrixgraph_core::traverse::{TraversalEngine, TraversalEvent, TraversalKind, TraversalSummary};
use serde::Serialize;

use super::{CommandContext, MatrixSource};
use crate::output::{pretty_kv, pretty_section, render_mode, write_adjacency};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    #[default]
    Bfs,
    Dfs,
}

impl From<KindArg> for TraversalKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Bfs => Self::Bfs,
            KindArg::Dfs => Self::Dfs,
        }
    }
}

/// Arguments for `mg traverse`.
#[derive(Args, Debug, Default)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Traversal strategy.
    #[arg(long, short = 'k', value_enum, default_value_t = KindArg::Bfs)]
    pub kind: KindArg,

    /// Traverse the undirected version of the matrix.
    #[arg(long)]
    pub undirected: bool,

    /// Print every traversal event in order.
    #[arg(long)]
    pub steps: bool,
}

/// Report payload for `mg traverse`.
#[derive(Debug, Serialize)]
pub struct TraverseOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TraversalEvent>,
    #[serde(flatten)]
    pub summary: TraversalSummary,
}

/// Drive the engine to completion, keeping the event log when asked.
pub fn traverse_output(engine: &mut TraversalEngine, record_events: bool) -> TraverseOutput {
    let mut events = Vec::new();
    while let Some(event) = engine.step() {
        if record_events {
            events.push(event);
        }
    }
    TraverseOutput {
        events,
        summary: engine.summary(),
    }
}

fn write_output(w: &mut dyn Write, out: &TraverseOutput, pretty: bool) -> io::Result<()> {
    let summary = &out.summary;

    if !out.events.is_empty() {
        if pretty {
            pretty_section(w, &format!("{} steps", summary.kind))?;
        }
        for (i, event) in out.events.iter().enumerate() {
            writeln!(w, "{:>3}. {event}", i + 1)?;
        }
        writeln!(w)?;
    }

    let order: Vec<String> = summary
        .discovery_order
        .iter()
        .map(|v| (v + 1).to_string())
        .collect();
    if pretty {
        pretty_section(w, &format!("{} result", summary.kind))?;
        pretty_kv(w, "order", order.join(" "))?;
        pretty_kv(w, "components", summary.components.to_string())?;
        writeln!(w, "{:>6} {:>6}", "old", "new")?;
        for (old, new) in &summary.renumbering {
            writeln!(w, "{old:>6} {new:>6}")?;
        }
        writeln!(w)?;
        pretty_section(w, "Traversal tree")?;
    } else {
        writeln!(w, "order {}", order.join(" "))?;
        for (old, new) in &summary.renumbering {
            writeln!(w, "{old} -> {new}")?;
        }
        writeln!(w)?;
    }
    write_adjacency(w, &summary.tree, pretty)
}

/// Execute `mg traverse`.
pub fn run_traverse(args: &TraverseArgs, ctx: &CommandContext) -> anyhow::Result<()> {
    let mut matrix = args.source.load(&ctx.config)?;
    if args.undirected {
        matrix = matrix.symmetrized();
    }
    let mut engine = TraversalEngine::new(matrix, args.kind.into());
    let out = traverse_output(&mut engine, args.steps);
    render_mode(
        ctx.output,
        &out,
        |o, w| write_output(w, o, false),
        |o, w| write_output(w, o, true),
    )
}
