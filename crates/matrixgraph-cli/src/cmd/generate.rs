//! `mg generate`: print the seeded directed matrix and its derived forms.

use std::io::{self, Write};

use clap::Args;
use matrixgraph_core::generate::random_weights;
use matrixgraph_core::matrix::{AdjacencyMatrix, WeightMatrix};
use serde::Serialize;

use super::{CommandContext, MatrixSource};
use crate::config::GeneratorSection;
use crate::output::{pretty_kv, pretty_section, render_mode, write_adjacency, write_weights};

/// Arguments for `mg generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Also print the undirected version (self-loops kept).
    #[arg(long)]
    pub undirected: bool,

    /// Also print the weight matrix over the loop-free undirected version.
    #[arg(long)]
    pub weights: bool,

    /// Seed for the weight matrix (defaults to `weight_seed`, then `seed`).
    #[arg(long, requires = "weights")]
    pub weight_seed: Option<u64>,
}

/// Report payload for `mg generate`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorSection>,
    pub directed: AdjacencyMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undirected: Option<AdjacencyMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightMatrix>,
}

fn write_output(w: &mut dyn Write, out: &GenerateOutput, pretty: bool) -> io::Result<()> {
    if pretty {
        if let Some(generator) = &out.generator {
            pretty_kv(w, "vertices", generator.vertex_count.to_string())?;
            pretty_kv(w, "seed", generator.seed.to_string())?;
            pretty_kv(w, "coefficient", generator.coefficient.to_string())?;
            writeln!(w)?;
        }
        pretty_section(w, "Directed")?;
    }
    write_adjacency(w, &out.directed, pretty)?;

    if let Some(undirected) = &out.undirected {
        writeln!(w)?;
        if pretty {
            pretty_section(w, "Undirected")?;
        }
        write_adjacency(w, undirected, pretty)?;
    }
    if let Some(weights) = &out.weights {
        writeln!(w)?;
        if pretty {
            pretty_section(w, "Weights")?;
        }
        write_weights(w, weights, pretty)?;
    }
    Ok(())
}

/// Execute `mg generate`.
pub fn run_generate(args: &GenerateArgs, ctx: &CommandContext) -> anyhow::Result<()> {
    let directed = args.source.load(&ctx.config)?;
    let generator = args.source.generator(&ctx.config);

    let weights = args.weights.then(|| {
        let seed = args
            .weight_seed
            .unwrap_or_else(|| generator.effective_weight_seed());
        random_weights(&directed.symmetrized_without_loops(), seed)
    });

    let out = GenerateOutput {
        generator: args.source.input.is_none().then_some(generator),
        undirected: args.undirected.then(|| directed.symmetrized()),
        directed,
        weights,
    };
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
    fn text_output_separates_blocks_with_blank_line() {
        let directed = AdjacencyMatrix::from_edges(2, &[(0, 1)]);
        let out = GenerateOutput {
            generator: None,
            undirected: Some(directed.symmetrized()),
            directed,
            weights: None,
        };
        let mut buf = Vec::new();
        write_output(&mut buf, &out, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 1\n0 0\n\n0 1\n1 0\n");
    }
}
