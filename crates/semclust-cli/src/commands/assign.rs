use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use semclust_core::config::AssignmentStrategy;
use semclust_merge::{assign_variables, VariablePlacement};
use tracing::{info, warn};

use super::{GlobalArgs, RunContext};

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Variables file with a `variable` column
    #[arg(long, value_name = "PATH")]
    pub variables: PathBuf,

    /// Cluster label table produced by `cluster`
    #[arg(long, value_name = "PATH")]
    pub labels: PathBuf,

    /// Assignment strategy: similarity or kmeans
    #[arg(long)]
    pub strategy: Option<AssignmentStrategy>,

    /// `variable,cluster` output
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// K-means labels of the reference nodes (kmeans strategy only)
    #[arg(long, value_name = "PATH")]
    pub clusters_out: Option<PathBuf>,
}

pub fn handle_assign(global: &GlobalArgs, args: AssignArgs) -> anyhow::Result<()> {
    let ctx = RunContext::load(global, None, args.strategy)?;

    let rows = semclust_io::read_label_table(&args.labels)?;
    let variables = semclust_io::read_variables(&args.variables)?;
    let placement = assign_variables(&ctx.engine, &rows, &variables, &ctx.config)
        .context("assigning variables to clusters")?;

    semclust_io::write_variable_assignments(&args.out, &placement.assignments)?;
    if let Some(path) = &args.clusters_out {
        write_training_clusters(path, &placement)?;
    }

    info!(
        variables = placement.assignments.len(),
        clusters = placement.groups.len(),
        out = %args.out.display(),
        "variable assignments written"
    );
    Ok(())
}

/// Write the k-means training labels when the placement has them.
pub(crate) fn write_training_clusters(path: &Path, placement: &VariablePlacement) -> anyhow::Result<()> {
    match &placement.training {
        Some(training) => {
            semclust_io::write_node_clusters(path, training)?;
            info!(nodes = training.len(), out = %path.display(), "reference node clusters written");
        }
        None => warn!(
            out = %path.display(),
            "similarity strategy has no k-means clusters; skipping"
        ),
    }
    Ok(())
}
