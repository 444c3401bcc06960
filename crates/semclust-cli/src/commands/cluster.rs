use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use semclust_clustering::cluster_nodes;
use semclust_core::config::DensityAlgorithm;
use tracing::info;

use super::{GlobalArgs, RunContext};

#[derive(Args, Debug)]
pub struct ClusterArgs {
    /// Edge list with `subject` and `object` columns
    #[arg(long, value_name = "PATH")]
    pub edges: PathBuf,

    /// Cluster label table to write
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Density algorithm: dbscan or hdbscan
    #[arg(long)]
    pub density: Option<DensityAlgorithm>,
}

/// Subjects followed by objects, duplicates kept, one label row per entry.
pub fn handle_cluster(global: &GlobalArgs, args: ClusterArgs) -> anyhow::Result<()> {
    let ctx = RunContext::load(global, args.density, None)?;

    let (subjects, objects) = semclust_io::read_vertex_columns(&args.edges)?;
    let mut nodes = subjects;
    nodes.extend(objects);

    let clustering = cluster_nodes(&ctx.engine, nodes, &ctx.config.clustering)
        .with_context(|| format!("clustering nodes of {}", args.edges.display()))?;
    let rows = clustering.to_rows();
    semclust_io::write_label_table(&args.out, &rows)?;

    info!(
        rows = rows.len(),
        out = %args.out.display(),
        cached_phrases = ctx.engine.cached_phrases(),
        "cluster label table written"
    );
    Ok(())
}
