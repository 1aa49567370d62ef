//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use graph_walk::cli::commands;
use graph_walk::graph::TraversalDirection;
use graph_walk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "gwalk — traverse and analyse graphs described in the D/G text format"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Graph file to load; the built-in sample graph is used when omitted
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List vertices and edges
    Info,
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Start vertex ID
        start: String,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Start vertex ID
        start: String,
    },
    /// Shortest path between two vertices
    Path {
        /// Start vertex ID
        start: String,
        /// Target vertex ID
        target: String,
    },
    /// Vertices at an exact distance from a vertex
    Nearby {
        /// Start vertex ID
        start: String,
        /// Number of edges away
        #[arg(long, default_value = "2")]
        distance: usize,
    },
    /// Check whether the part reachable from a vertex is bipartite
    Bipartite {
        /// Start vertex ID
        start: String,
    },
    /// Partition the graph into components
    Components {
        /// Adjacency to follow: forward, backward, or both
        #[arg(long, default_value = "forward")]
        direction: String,
    },
    /// Summary plus every query, starting from the first vertex
    Report,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already installed: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == OutputFormat::Json;

    init_logging(cli.verbose);

    let graph = match commands::load_graph(cli.file.as_deref()) {
        Ok(graph) => graph,
        Err(e) => exit_with(&e),
    };

    let result = match cli.command {
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::Bfs { start } => commands::cmd_bfs(&graph, &start, json),
        Commands::Dfs { start } => commands::cmd_dfs(&graph, &start, json),
        Commands::Path { start, target } => commands::cmd_path(&graph, &start, &target, json),
        Commands::Nearby { start, distance } => {
            commands::cmd_nearby(&graph, &start, distance, json)
        }
        Commands::Bipartite { start } => commands::cmd_bipartite(&graph, &start, json),
        Commands::Components { direction } => {
            let dir = match TraversalDirection::from_name(&direction) {
                Some(dir) => dir,
                None => {
                    eprintln!("Invalid direction: {}", direction);
                    process::exit(3);
                }
            };
            commands::cmd_components(&graph, dir, json)
        }
        Commands::Report => commands::cmd_report(&graph, json),
    };

    if let Err(e) = result {
        exit_with(&e);
    }
}

fn exit_with(e: &GraphError) -> ! {
    eprintln!("Error: {}", e);
    let code = match e {
        GraphError::Io(_) => 1,
        GraphError::MissingHeader
        | GraphError::MissingVertices
        | GraphError::MalformedEdge(_)
        | GraphError::DuplicateVertex(_) => 2,
        GraphError::VertexNotFound(_) => 4,
    };
    process::exit(code);
}
