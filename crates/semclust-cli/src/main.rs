//! semclust CLI
//!
//! Each subcommand is one pipeline stage over CSV files:
//!
//! - `cluster`: embed edge-list nodes, label them twice, write the label table
//! - `assign`: place variables into clusters of a label table
//! - `merge`: build the merged graph with variable edges attached
//! - `score`: accuracy of predicted clusters against ground truth
//! - `sweep`: accuracy and attachment rate across thresholds
//! - `pairs`: export every unique vertex pair with its similarity
//! - `similar-vertices`: near-duplicate vertices within each column
//!
//! Exit code 0 on success, 1 on any error.

use clap::{Parser, Subcommand};
use tracing::error;

mod commands;
mod tracing_setup;

use commands::GlobalArgs;

/// Semantic clustering and merge pipeline for extracted knowledge graphs
#[derive(Parser)]
#[command(name = "semclust")]
#[command(version)]
#[command(about = "Cluster, merge and score knowledge-graph vertices by embedding similarity")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster edge-list nodes and write the cluster label table
    Cluster(commands::cluster::ClusterArgs),
    /// Assign variables to clusters of a label table
    Assign(commands::assign::AssignArgs),
    /// Merge cohesive clusters and attach variables to the result
    Merge(commands::merge::MergeArgs),
    /// Report accuracy of predicted clusters against a ground truth column
    Score(commands::score::ScoreArgs),
    /// Sweep the variable threshold and report where accuracy meets coverage
    Sweep(commands::sweep::SweepArgs),
    /// Export every unique vertex pair with its similarity
    Pairs(commands::pairs::PairsArgs),
    /// Find near-duplicate vertices within the subject and object columns
    SimilarVertices(commands::pairs::SimilarVerticesArgs),
}

fn main() {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Cluster(args) => commands::cluster::handle_cluster(&cli.global, args),
        Commands::Assign(args) => commands::assign::handle_assign(&cli.global, args),
        Commands::Merge(args) => commands::merge::handle_merge(&cli.global, args),
        Commands::Score(args) => commands::score::handle_score(args),
        Commands::Sweep(args) => commands::sweep::handle_sweep(&cli.global, args),
        Commands::Pairs(args) => commands::pairs::handle_pairs(&cli.global, args),
        Commands::SimilarVertices(args) => commands::pairs::handle_similar_vertices(&cli.global, args),
    };

    if let Err(e) = result {
        error!(error = format!("{e:#}"), "semclust failed");
        std::process::exit(1);
    }
}
