//! Shared output layer for pretty/text/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: framed pretty output for humans, compact text for pipes, or
//! stable JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` flag
//! 2. hidden `--json` flag
//! 3. `MG_FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 4. `[output] format` in the config file
//! 5. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.
//!
//! Vertex numbers in pretty and text output are 1-based. JSON keeps the
//! 0-based indices the library works with.

use clap::ValueEnum;
use matrixgraph_core::MatrixError;
use matrixgraph_core::matrix::{AdjacencyMatrix, WeightMatrix};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<16} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (headed matrices, sections, visual framing).
    Pretty,
    /// Plain text for pipes: bare matrix rows, one fact per line.
    Text,
    /// Machine-readable JSON, one document per command.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Parse a mode name from the environment or a config file.
    pub fn parse_name(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "human" => Some(Self::Pretty),
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    config_format: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    // Unknown values fall through to the next source.
    if let Some(mode) = format_env.and_then(OutputMode::parse_name) {
        return mode;
    }
    if let Some(mode) = config_format.and_then(OutputMode::parse_name) {
        return mode;
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, config, and TTY
/// defaults.
pub fn resolve_output_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    config_format: Option<&str>,
) -> OutputMode {
    let env_val = std::env::var("MG_FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(
        format_flag,
        json_flag,
        env_val.as_deref(),
        config_format,
        is_tty,
    )
}

/// Render a serializable value with explicit pretty/text renderers.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, mode, value, text_fn, pretty_fn)
}

/// [`render_mode`] into an arbitrary writer.
pub fn render_to<T: Serialize>(
    out: &mut dyn Write,
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, out)?,
        OutputMode::Pretty => pretty_fn(value, out)?,
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Matrices
// ────────────────────────────────────────────────────────────────────────────

fn write_grid(
    w: &mut dyn Write,
    n: usize,
    cell: impl Fn(usize, usize) -> String,
    headed: bool,
) -> io::Result<()> {
    let width = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| cell(i, j).len())
        .chain(std::iter::once(n.to_string().len()))
        .max()
        .unwrap_or(1);

    if headed {
        write!(w, "{:>width$} |", "")?;
        for j in 0..n {
            write!(w, " {:>width$}", j + 1)?;
        }
        writeln!(w)?;
        writeln!(w, "{:-<len$}", "", len = (width + 1) * (n + 1) + 1)?;
    }
    for i in 0..n {
        if headed {
            write!(w, "{:>width$} |", i + 1)?;
        }
        let row: Vec<String> = (0..n).map(|j| format!("{:>width$}", cell(i, j))).collect();
        if headed {
            writeln!(w, " {}", row.join(" "))?;
        } else {
            writeln!(w, "{}", row.join(" "))?;
        }
    }
    Ok(())
}

/// Print a 0/1 matrix. Pretty mode adds 1-based row and column headers.
pub fn write_adjacency(w: &mut dyn Write, matrix: &AdjacencyMatrix, pretty: bool) -> io::Result<()> {
    write_grid(
        w,
        matrix.size(),
        |i, j| u8::from(matrix.get(i, j)).to_string(),
        pretty,
    )
}

/// Print a weight matrix. Pretty mode adds 1-based row and column headers.
pub fn write_weights(w: &mut dyn Write, matrix: &WeightMatrix, pretty: bool) -> io::Result<()> {
    write_grid(w, matrix.size(), |i, j| matrix.get(i, j).to_string(), pretty)
}

/// Comma-separated vertex numbers (`-` when empty).
pub fn vertex_list(vertices: &[usize]) -> String {
    if vertices.is_empty() {
        return "-".to_string();
    }
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// A structured error with optional suggestion and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message, including context.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "not_square", "config").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create a simple error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }
}

const fn matrix_error_code(err: &MatrixError) -> &'static str {
    match err {
        MatrixError::NotSquare { .. } => "not_square",
        MatrixError::NonBinary { .. } => "non_binary",
        MatrixError::Asymmetric { .. } => "asymmetric",
        MatrixError::DimensionMismatch { .. } => "dimension_mismatch",
        MatrixError::UnsupportedWalkLength(_) => "unsupported_walk_length",
    }
}

impl From<&anyhow::Error> for CliError {
    fn from(err: &anyhow::Error) -> Self {
        let mut cli = Self::new(format!("{err:#}"));
        if let Some(matrix_err) = err.chain().find_map(|e| e.downcast_ref::<MatrixError>()) {
            cli.error_code = Some(matrix_error_code(matrix_err).to_string());
            if let MatrixError::UnsupportedWalkLength(_) = matrix_err {
                cli.suggestion = Some("use --length 2 or --length 3".to_string());
            }
        } else if err.chain().any(|e| e.downcast_ref::<toml::de::Error>().is_some()) {
            cli.error_code = Some("config".to_string());
        }
        cli
    }
}

/// Render an error in the requested format.
pub fn write_error(out: &mut dyn Write, mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut *out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_error(&mut out, mode, error)
}
