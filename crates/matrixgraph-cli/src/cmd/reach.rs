//! `mg reach`: reachability, strong connectivity, SCCs, and condensation.

use std::io::{self, Write};

use clap::Args;
use matrixgraph_core::matrix::AdjacencyMatrix;
use matrixgraph_core::reach::ConnectivityAnalysis;
use serde::Serialize;

use super::{CommandContext, MatrixSource};
use crate::output::{pretty_kv, pretty_section, render_mode, write_adjacency};

/// Arguments for `mg reach`.
#[derive(Args, Debug, Default)]
pub struct ReachArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Print only the component list, not the R and S matrices.
    #[arg(long)]
    pub components_only: bool,
}

/// Report payload for `mg reach`.
#[derive(Debug, Serialize)]
pub struct ReachOutput {
    pub vertex_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachability: Option<AdjacencyMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_connectivity: Option<AdjacencyMatrix>,
    /// Component labels, 1-based (`"1,2,3"`).
    pub components: Vec<String>,
    pub cycle_count: usize,
    pub strongly_connected: bool,
    pub condensation: AdjacencyMatrix,
}

/// Build the report for `matrix`.
pub fn reach_output(matrix: &AdjacencyMatrix, components_only: bool) -> ReachOutput {
    let analysis = ConnectivityAnalysis::from_matrix(matrix);
    ReachOutput {
        vertex_count: matrix.size(),
        reachability: (!components_only).then(|| analysis.reachability.matrix().clone()),
        strong_connectivity: (!components_only).then(|| analysis.strong.matrix().clone()),
        cycle_count: analysis.cycle_count(),
        strongly_connected: analysis.is_strongly_connected(),
        components: analysis.condensation.labels,
        condensation: analysis.condensation.matrix,
    }
}

fn write_output(w: &mut dyn Write, out: &ReachOutput, pretty: bool) -> io::Result<()> {
    if let Some(r) = &out.reachability {
        if pretty {
            pretty_section(w, "Reachability")?;
        }
        write_adjacency(w, r, pretty)?;
        writeln!(w)?;
    }
    if let Some(s) = &out.strong_connectivity {
        if pretty {
            pretty_section(w, "Strong connectivity")?;
        }
        write_adjacency(w, s, pretty)?;
        writeln!(w)?;
    }

    if pretty {
        pretty_section(w, "Components")?;
        for (c, label) in out.components.iter().enumerate() {
            writeln!(w, "  C{}: {{{label}}}", c + 1)?;
        }
        pretty_kv(w, "cycles", out.cycle_count.to_string())?;
        pretty_kv(w, "strongly conn.", out.strongly_connected.to_string())?;
        writeln!(w)?;
        pretty_section(w, "Condensation")?;
    } else {
        for label in &out.components {
            writeln!(w, "{{{label}}}")?;
        }
        writeln!(w)?;
    }
    write_adjacency(w, &out.condensation, pretty)
}

/// Execute `mg reach`.
pub fn run_reach(args: &ReachArgs, ctx: &CommandContext) -> anyhow::Result<()> {
    let matrix = args.source.load(&ctx.config)?;
    let out = reach_output(&matrix, args.components_only);
    render_mode(
        ctx.output,
        &out,
        |o, w| write_output(w, o, false),
        |o, w| write_output(w, o, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_plus_isolated() {
        let m = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 0)]);
        let out = reach_output(&m, true);
        assert_eq!(out.components, vec!["1,2,3", "4"]);
        assert_eq!(out.cycle_count, 1);
        assert!(!out.strongly_connected);
        assert!(out.reachability.is_none());

        let mut buf = Vec::new();
        write_output(&mut buf, &out, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{1,2,3}\n{4}\n\n0 0\n0 0\n");
    }
}
