use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use semclust_core::config::AssignmentStrategy;
use semclust_merge::{assign_variables, intersection_threshold, threshold_sweep};
use tracing::{info, warn};

use super::{GlobalArgs, RunContext};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Ground truth file, row-aligned with the variables file
    #[arg(long, value_name = "PATH")]
    pub truth: PathBuf,

    /// Cluster label table produced by `cluster`
    #[arg(long, value_name = "PATH")]
    pub labels: PathBuf,

    /// Variables file with a `variable` column
    #[arg(long, value_name = "PATH")]
    pub variables: PathBuf,

    /// Truth column, e.g. KMeansLabels or DBSCANLabels
    #[arg(long, default_value = "KMeansLabels")]
    pub column: String,

    /// Sweep curve to write
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Also write the `variable,cluster` predictions the sweep scored
    #[arg(long, value_name = "PATH")]
    pub predicted_out: Option<PathBuf>,

    /// Assignment strategy: similarity or kmeans (default kmeans)
    #[arg(long)]
    pub strategy: Option<AssignmentStrategy>,

    /// Print the intersection and curve as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_sweep(global: &GlobalArgs, args: SweepArgs) -> anyhow::Result<()> {
    let strategy = args.strategy.unwrap_or(AssignmentStrategy::Kmeans);
    let ctx = RunContext::load(global, None, Some(strategy))?;

    let rows = semclust_io::read_label_table(&args.labels)?;
    let variables = semclust_io::read_variables(&args.variables)?;
    let truth = semclust_io::read_truth_column(&args.truth, &args.column)?;

    let placement = assign_variables(&ctx.engine, &rows, &variables, &ctx.config)
        .context("assigning variables to clusters")?;
    if let Some(path) = &args.predicted_out {
        semclust_io::write_variable_assignments(path, &placement.assignments)?;
    }

    let predicted: Vec<i32> = placement.assignments.iter().map(|a| a.cluster as i32).collect();
    let similarities: Vec<f64> = placement
        .assignments
        .iter()
        .map(|a| a.average_similarity)
        .collect();
    let points = threshold_sweep(&truth, &predicted, &similarities)
        .with_context(|| format!("sweeping against {}", args.truth.display()))?;
    semclust_io::write_sweep(&args.out, &points)?;

    let intersection = intersection_threshold(&points);
    match intersection {
        Some(threshold) => info!(threshold, points = points.len(), "accuracy meets attachment rate"),
        None => warn!(points = points.len(), "accuracy and attachment rate never cross"),
    }

    if args.json {
        let report = serde_json::json!({
            "intersection": intersection,
            "points": points,
        });
        println!("{report}");
    } else {
        match intersection {
            Some(threshold) => println!("intersection: {threshold:.2}"),
            None => println!("intersection: none"),
        }
    }
    Ok(())
}
