//! CLI entry point for the `graphtk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use graph_toolkit::cli::{commands, load_graph, GraphSource};
use graph_toolkit::GraphError;

#[derive(Parser)]
#[command(
    name = "graphtk",
    about = "Graph toolkit CLI: matrices, shortest paths and spanning trees"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// JSON graph description file
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Inline vertices, e.g. "A, B, C"
    #[arg(long, global = true)]
    vertices: Option<String>,

    /// Inline edges, e.g. "[A,B],[B,C,3]"
    #[arg(long, global = true)]
    edges: Option<String>,

    /// Treat edges as directional
    #[arg(long, global = true)]
    oriented: bool,

    /// Edges carry weights
    #[arg(long, global = true)]
    weighted: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show graph flags and sizes
    Info,
    /// Show each vertex with its neighbours
    AdjacencyList,
    /// Show the vertex x vertex adjacency matrix
    AdjacencyMatrix,
    /// Show the vertex x edge incidence matrix
    IncidenceMatrix,
    /// Shortest path between two vertices
    Path {
        /// Origin vertex
        origin: String,
        /// Destination vertex
        destination: String,
    },
    /// Shortest distance from a source to every vertex
    Distances {
        /// Source vertex
        source: String,
    },
    /// Minimum spanning tree (Kruskal)
    Kruskal,
    /// Minimum spanning tree (Prim/Jarník)
    Prim,
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid format: {}", other);
            process::exit(3);
        }
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let source = GraphSource {
        file: cli.input.file,
        vertices: cli.input.vertices,
        edges: cli.input.edges,
        oriented: cli.input.oriented,
        weighted: cli.input.weighted,
    };

    let result = load_graph(&source).and_then(|graph| match &cli.command {
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::AdjacencyList => commands::cmd_adjacency_list(&graph, json),
        Commands::AdjacencyMatrix => commands::cmd_adjacency_matrix(&graph, json),
        Commands::IncidenceMatrix => commands::cmd_incidence_matrix(&graph, json),
        Commands::Path {
            origin,
            destination,
        } => commands::cmd_path(&graph, origin, destination, json),
        Commands::Distances { source } => commands::cmd_distances(&graph, source, json),
        Commands::Kruskal => commands::cmd_kruskal(&graph, json),
        Commands::Prim => commands::cmd_prim(&graph, json),
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 1,
                GraphError::Json(_) | GraphError::InvalidInput(_) => 2,
                GraphError::InvalidConfiguration(_) => 3,
                GraphError::VertexNotFound(_) | GraphError::Unreachable { .. } => 4,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
