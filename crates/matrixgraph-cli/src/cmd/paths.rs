//! `mg paths`: every walk of length 2 and/or 3.

use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use matrixgraph_core::matrix::AdjacencyMatrix;
use matrixgraph_core::paths::{Walk, WalkLength, paths_of_length};
use serde::Serialize;

use super::{CommandContext, MatrixSource};
use crate::output::{pretty_section, render_mode};

/// Arguments for `mg paths`.
#[derive(Args, Debug, Default)]
pub struct PathsArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Walk length in edges (2 or 3). Both when omitted.
    #[arg(long, short = 'l')]
    pub length: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct WalkGroup {
    pub length: usize,
    pub count: usize,
    pub walks: Vec<Walk>,
}

/// Report payload for `mg paths`.
#[derive(Debug, Serialize)]
pub struct PathsOutput {
    pub groups: Vec<WalkGroup>,
}

fn collect_group(matrix: &AdjacencyMatrix, length: WalkLength) -> WalkGroup {
    let walks: Vec<Walk> = paths_of_length(matrix, length).collect();
    WalkGroup {
        length: length.edges(),
        count: walks.len(),
        walks,
    }
}

/// Build the report for the requested lengths.
pub fn paths_output(matrix: &AdjacencyMatrix, length: Option<usize>) -> anyhow::Result<PathsOutput> {
    let lengths = match length {
        Some(len) => vec![WalkLength::try_from(len).context("invalid --length")?],
        None => vec![WalkLength::Two, WalkLength::Three],
    };
    Ok(PathsOutput {
        groups: lengths.into_iter().map(|l| collect_group(matrix, l)).collect(),
    })
}

fn write_output(w: &mut dyn Write, out: &PathsOutput, pretty: bool) -> io::Result<()> {
    for (pos, group) in out.groups.iter().enumerate() {
        if pos > 0 {
            writeln!(w)?;
        }
        if pretty {
            pretty_section(w, &format!("Walks of length {} ({})", group.length, group.count))?;
        } else {
            writeln!(w, "length {} count {}", group.length, group.count)?;
        }
        for walk in &group.walks {
            writeln!(w, "{walk}")?;
        }
    }
    Ok(())
}

/// Execute `mg paths`.
pub fn run_paths(args: &PathsArgs, ctx: &CommandContext) -> anyhow::Result<()> {
    let matrix = args.source.load(&ctx.config)?;
    let out = paths_output(&matrix, args.length)?;
    render_mode(
        ctx.output,
        &out,
        |o, w| write_output(w, o, false),
        |o, w| write_output(w, o, true),
    )
}
