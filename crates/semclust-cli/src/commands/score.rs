use std::path::PathBuf;

use clap::Args;
use semclust_merge::accuracy;
use tracing::info;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Ground truth file
    #[arg(long, value_name = "PATH")]
    pub truth: PathBuf,

    /// Predictions with a `cluster` column, row-aligned with the truth file
    #[arg(long, value_name = "PATH")]
    pub predicted: PathBuf,

    /// Truth column, e.g. KMeansLabels or DBSCANLabels
    #[arg(long, default_value = "KMeansLabels")]
    pub column: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_score(args: ScoreArgs) -> anyhow::Result<()> {
    let truth = semclust_io::read_truth_column(&args.truth, &args.column)?;
    let predicted = semclust_io::read_cluster_column(&args.predicted)?;
    let score = accuracy(&truth, &predicted)?;

    info!(column = %args.column, rows = predicted.len(), accuracy = score, "scored predictions");
    if args.json {
        let report = serde_json::json!({
            "column": args.column,
            "rows": predicted.len(),
            "accuracy": score,
        });
        println!("{report}");
    } else {
        println!("accuracy: {score}");
    }
    Ok(())
}
