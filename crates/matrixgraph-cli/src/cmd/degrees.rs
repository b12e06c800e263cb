//! `mg degrees`: degree table, regularity, pendant and isolated vertices.

use std::io::{self, Write};

use clap::Args;
use matrixgraph_core::degree::{DegreeReport, Regularity, SpecialVertices};
use serde::Serialize;

use super::{CommandContext, MatrixSource};
use crate::output::{pretty_kv, pretty_section, render_mode, vertex_list};

/// Arguments for `mg degrees`.
#[derive(Args, Debug, Default)]
pub struct DegreesArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Report only the directed analysis.
    #[arg(long, conflicts_with = "undirected_only")]
    pub directed_only: bool,

    /// Report only the undirected analysis (loops kept, counted twice).
    #[arg(long)]
    pub undirected_only: bool,
}

/// Report payload for `mg degrees`.
#[derive(Debug, Serialize)]
pub struct DegreesOutput {
    pub vertex_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directed: Option<DegreeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undirected: Option<DegreeReport>,
}

fn regularity_text(r: Regularity) -> String {
    if r.is_regular {
        format!("regular, degree {}", r.degree)
    } else {
        "not regular".to_string()
    }
}

fn write_special(w: &mut dyn Write, special: &SpecialVertices, pretty: bool) -> io::Result<()> {
    if pretty {
        pretty_kv(w, "pendant", vertex_list(&special.pendant))?;
        pretty_kv(w, "isolated", vertex_list(&special.isolated))
    } else {
        writeln!(w, "pendant {}", vertex_list(&special.pendant))?;
        writeln!(w, "isolated {}", vertex_list(&special.isolated))
    }
}

fn write_report(w: &mut dyn Write, report: &DegreeReport, pretty: bool) -> io::Result<()> {
    match report {
        DegreeReport::Undirected { degrees, .. } => {
            if pretty {
                pretty_section(w, "Undirected degrees")?;
                writeln!(w, "{:>6} {:>6}", "vertex", "deg")?;
            }
            for (i, d) in degrees.iter().enumerate() {
                writeln!(w, "{:>6} {:>6}", i + 1, d)?;
            }
        }
        DegreeReport::Directed { degrees, total, .. } => {
            if pretty {
                pretty_section(w, "Directed degrees")?;
                writeln!(w, "{:>6} {:>6} {:>6} {:>6}", "vertex", "out", "in", "total")?;
            }
            for i in 0..total.len() {
                writeln!(
                    w,
                    "{:>6} {:>6} {:>6} {:>6}",
                    i + 1,
                    degrees.out_degree[i],
                    degrees.in_degree[i],
                    total[i]
                )?;
            }
        }
    }

    if pretty {
        pretty_kv(w, "regularity", regularity_text(report.regularity()))?;
    } else {
        writeln!(w, "regularity {}", regularity_text(report.regularity()))?;
    }
    write_special(w, report.special(), pretty)
}

fn write_output(w: &mut dyn Write, out: &DegreesOutput, pretty: bool) -> io::Result<()> {
    let reports = [out.directed.as_ref(), out.undirected.as_ref()];
    for (pos, report) in reports.into_iter().flatten().enumerate() {
        if pos > 0 {
            writeln!(w)?;
        }
        write_report(w, report, pretty)?;
    }
    Ok(())
}

/// Build the report without rendering it.
pub fn degrees_output(
    matrix: &matrixgraph_core::matrix::AdjacencyMatrix,
    args: &DegreesArgs,
) -> DegreesOutput {
    DegreesOutput {
        vertex_count: matrix.size(),
        directed: (!args.undirected_only).then(|| DegreeReport::directed(matrix)),
        undirected: (!args.directed_only).then(|| DegreeReport::undirected(&matrix.symmetrized())),
    }
}

/// Execute `mg degrees`.
pub fn run_degrees(args: &DegreesArgs, ctx: &CommandContext) -> anyhow::Result<()> {
    let matrix = args.source.load(&ctx.config)?;
    let out = degrees_output(&matrix, args);
    render_mode(
        ctx.output,
        &out,
        |o, w| write_output(w, o, false),
        |o, w| write_output(w, o, true),
    )
}
