use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use semclust_core::config::AssignmentStrategy;
use semclust_merge::build_final_graph;
use tracing::info;

use super::assign::write_training_clusters;
use super::{GlobalArgs, RunContext};

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Edge list with `subject`, `verb` and `object` columns
    #[arg(long, value_name = "PATH")]
    pub edges: PathBuf,

    /// Cluster label table produced by `cluster`
    #[arg(long, value_name = "PATH")]
    pub labels: PathBuf,

    /// Variables file with a `variable` column
    #[arg(long, value_name = "PATH")]
    pub variables: PathBuf,

    /// Merged edge list to write
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// `variable,cluster` predictions
    #[arg(long, value_name = "PATH")]
    pub predicted_out: Option<PathBuf>,

    /// K-means labels of the reference nodes (kmeans strategy only)
    #[arg(long, value_name = "PATH")]
    pub clusters_out: Option<PathBuf>,

    /// Assignment strategy: similarity or kmeans
    #[arg(long)]
    pub strategy: Option<AssignmentStrategy>,
}

pub fn handle_merge(global: &GlobalArgs, args: MergeArgs) -> anyhow::Result<()> {
    let ctx = RunContext::load(global, None, args.strategy)?;

    let rows = semclust_io::read_label_table(&args.labels)?;
    let edges = semclust_io::read_edges(&args.edges)?;
    let variables = semclust_io::read_variables(&args.variables)?;

    let graph = build_final_graph(&ctx.engine, &rows, &edges, &variables, &ctx.config)
        .context("building the merged graph")?;

    semclust_io::write_edges(&args.out, &graph.edges)?;
    if let Some(path) = &args.predicted_out {
        semclust_io::write_variable_assignments(path, &graph.placement.assignments)?;
    }
    if let Some(path) = &args.clusters_out {
        write_training_clusters(path, &graph.placement)?;
    }

    info!(
        edges = graph.edges.len(),
        substituted_nodes = graph.plan.assignments.len(),
        attached = graph.attached,
        out = %args.out.display(),
        "merged graph written"
    );
    Ok(())
}
