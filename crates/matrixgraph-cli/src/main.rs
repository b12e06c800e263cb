#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mg: adjacency-matrix graph analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Config file (default: ./matrixgraph.toml, then the user config dir).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Input",
        about = "Print the generated matrix",
        long_about = "Print the seeded directed matrix, optionally with its undirected form and weights.",
        after_help = "EXAMPLES:\n    # Default generator settings\n    mg generate\n\n    # 8 vertices, undirected form and weights\n    mg generate -n 8 --seed 42 --undirected --weights"
    )]
    Generate(cmd::generate::GenerateArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Vertex degrees and regularity",
        long_about = "Report directed and undirected degrees, regularity, pendant and isolated vertices.",
        after_help = "EXAMPLES:\n    # Both analyses\n    mg degrees\n\n    # From a file, JSON output\n    mg degrees --input graph.json --json"
    )]
    Degrees(cmd::degrees::DegreesArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Walks of length 2 and 3",
        long_about = "List every walk (vertices may repeat) of length 2, 3, or both.",
        after_help = "EXAMPLES:\n    # Both lengths\n    mg paths\n\n    # Only length 3\n    mg paths --length 3"
    )]
    Paths(cmd::paths::PathsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Reachability, SCCs, and condensation",
        long_about = "Compute the reachability and strong-connectivity matrices, the strongly connected components, and the condensation graph.",
        after_help = "EXAMPLES:\n    # Full report\n    mg reach\n\n    # Components only\n    mg reach --components-only"
    )]
    Reach(cmd::reach::ReachArgs),

    #[command(
        next_help_heading = "Algorithms",
        about = "Minimum spanning forest (Kruskal)",
        long_about = "Run Kruskal's algorithm step by step over the weighted undirected graph.",
        after_help = "EXAMPLES:\n    # Generated weights\n    mg mst\n\n    # Show every considered edge\n    mg mst --steps\n\n    # Weights from a file\n    mg mst --input graph.json --weights weights.json"
    )]
    Mst(cmd::mst::MstArgs),

    #[command(
        next_help_heading = "Algorithms",
        about = "Stepwise BFS or DFS",
        long_about = "Traverse every component, printing discovery order, renumbering, and the traversal forest.",
        after_help = "EXAMPLES:\n    # Breadth-first\n    mg traverse\n\n    # Depth-first with the event log\n    mg traverse --kind dfs --steps"
    )]
    Traverse(cmd::traverse::TraverseArgs),

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    mg completions bash\n\n    # Generate zsh completions\n    mg completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("MG_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "matrixgraph=debug,mg=debug,info"
        } else {
            "matrixgraph=info,warn"
        })
    });

    let format = env::var("MG_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli, ctx: &cmd::CommandContext) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => cmd::generate::run_generate(&args, ctx),
        Commands::Degrees(args) => cmd::degrees::run_degrees(&args, ctx),
        Commands::Paths(args) => cmd::paths::run_paths(&args, ctx),
        Commands::Reach(args) => cmd::reach::run_reach(&args, ctx),
        Commands::Mst(args) => cmd::mst::run_mst(&args, ctx),
        Commands::Traverse(args) => cmd::traverse::run_traverse(&args, ctx),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config::resolve_config(cli.config.as_deref(), &working_dir);
    let config_format = config
        .as_ref()
        .ok()
        .and_then(|c| c.output.format.as_deref());
    let mode = output::resolve_output_mode(cli.format, cli.json, config_format);
    debug!(?mode, "output mode resolved");

    let result = config.and_then(|config| {
        let ctx = cmd::CommandContext {
            output: mode,
            config,
        };
        run(cli, &ctx)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            info!(error = %format!("{err:#}"), "command failed");
            if output::render_error(mode, &CliError::from(&err)).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_parses_after_subcommand() {
        let cli = Cli::parse_from(["mg", "reach", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Reach(_)));
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["mg", "--format", "text", "degrees"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["mg", "paths", "--config", "x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn generator_flags_parse() {
        let cli = Cli::parse_from(["mg", "generate", "-n", "5", "--seed", "9", "--coefficient", "0.8"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.source.vertices, Some(5));
        assert_eq!(args.source.seed, Some(9));
        assert_eq!(args.source.coefficient, Some(0.8));
    }

    #[test]
    fn input_conflicts_with_generator_flags() {
        let result = Cli::try_parse_from(["mg", "reach", "--input", "m.json", "--seed", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn traverse_kind_defaults_to_bfs() {
        let cli = Cli::parse_from(["mg", "traverse"]);
        let Commands::Traverse(args) = cli.command else {
            panic!("expected traverse");
        };
        assert_eq!(args.kind, cmd::traverse::KindArg::Bfs);
        assert!(!args.steps);
    }

    #[test]
    fn traverse_dfs_with_steps() {
        let cli = Cli::parse_from(["mg", "traverse", "--kind", "dfs", "--steps"]);
        let Commands::Traverse(args) = cli.command else {
            panic!("expected traverse");
        };
        assert_eq!(args.kind, cmd::traverse::KindArg::Dfs);
        assert!(args.steps);
    }

    #[test]
    fn completions_subcommand_parses() {
        let cli = Cli::parse_from(["mg", "completions", "bash"]);
        assert!(matches!(cli.command, Commands::Completions(_)));
    }

    #[test]
    fn completions_mention_binary_name() {
        let mut buf = Vec::new();
        cmd::completions::write_completions(
            clap_complete::Shell::Bash,
            &mut Cli::command(),
            &mut buf,
        );
        assert!(String::from_utf8_lossy(&buf).contains("mg"));
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
