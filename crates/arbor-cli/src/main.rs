//! Arbor CLI - run graph algorithms against the bundled sample graphs.
//!
//! Handy for eyeballing what an algorithm does on a graph small enough to
//! check by hand. Every command takes a sample name; `arbor samples` lists
//! them.

mod commands;
mod output;
mod sample;

use clap::{Parser, Subcommand, ValueEnum};

use arbor::Vertex;
use commands::mst::MstAlgorithm;
use commands::traverse::SearchOrder;
use sample::Sample;

/// Classic graph algorithms on small sample graphs.
///
/// Searches, components, topological order, shortest paths, and minimum
/// spanning trees, printed as tables or JSON.
#[derive(Parser)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress output and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List the bundled sample graphs
    Samples,

    /// Print every edge of a sample graph
    Dump {
        /// Sample graph
        sample: Sample,
    },

    /// Search an unweighted graph from one vertex and show the paths found
    Traverse {
        /// Sample graph (undirected or directed)
        sample: Sample,

        /// Vertex to start from
        #[arg(long, short, default_value_t = 0)]
        source: Vertex,

        /// Depth-first or breadth-first
        #[arg(long, value_enum, default_value_t)]
        order: SearchOrder,
    },

    /// Connected components, or strongly connected ones for digraphs
    Components {
        /// Sample graph (undirected or directed)
        sample: Sample,
    },

    /// Topological order of a directed graph
    Topo {
        /// Sample graph (directed)
        sample: Sample,
    },

    /// Dijkstra shortest paths from one vertex
    ShortestPath {
        /// Sample graph (weighted directed)
        #[arg(default_value = "tiny-ewd")]
        sample: Sample,

        /// Vertex to measure distances from
        #[arg(long, short, default_value_t = 0)]
        source: Vertex,
    },

    /// Minimum spanning tree of a weighted graph
    Mst {
        /// Sample graph (weighted undirected)
        #[arg(default_value = "tiny-ewg")]
        sample: Sample,

        /// Prim or Kruskal
        #[arg(long, short, value_enum, default_value_t)]
        algorithm: MstAlgorithm,

        /// Vertex Prim's algorithm grows from
        #[arg(long, default_value_t = 0)]
        root: Vertex,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Samples => commands::samples::run(cli.format, cli.quiet),
        Commands::Dump { sample } => commands::dump::run(sample, cli.format, cli.quiet),
        Commands::Traverse {
            sample,
            source,
            order,
        } => commands::traverse::run(sample, source, order, cli.format, cli.quiet),
        Commands::Components { sample } => {
            commands::components::run(sample, cli.format, cli.quiet)
        }
        Commands::Topo { sample } => commands::topo::run(sample, cli.format, cli.quiet),
        Commands::ShortestPath { sample, source } => {
            commands::shortest_path::run(sample, source, cli.format, cli.quiet)
        }
        Commands::Mst {
            sample,
            algorithm,
            root,
        } => commands::mst::run(sample, algorithm, root, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
