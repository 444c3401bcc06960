use std::path::PathBuf;

use clap::Args;
use semclust_clustering::{similar_vertices, vertex_pairs};
use tracing::info;

use super::{GlobalArgs, RunContext};

#[derive(Args, Debug)]
pub struct PairsArgs {
    /// Edge list with `subject` and `object` columns
    #[arg(long, value_name = "PATH")]
    pub edges: PathBuf,

    /// `first,second,similarity` output
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct SimilarVerticesArgs {
    /// Edge list with `subject` and `object` columns
    #[arg(long, value_name = "PATH")]
    pub edges: PathBuf,

    /// `first,second,similarity` output
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Similarity a pair must exceed (default from config)
    #[arg(long)]
    pub threshold: Option<f64>,
}

pub fn handle_pairs(global: &GlobalArgs, args: PairsArgs) -> anyhow::Result<()> {
    let ctx = RunContext::load(global, None, None)?;
    let (subjects, objects) = semclust_io::read_vertex_columns(&args.edges)?;

    let pairs = vertex_pairs(&ctx.engine, &subjects, &objects, ctx.config.pairs.shuffle_seed)?;
    semclust_io::write_pairs(&args.out, &pairs)?;

    info!(pairs = pairs.len(), out = %args.out.display(), "vertex pairs written");
    Ok(())
}

/// Subject pairs first, then object pairs.
pub fn handle_similar_vertices(global: &GlobalArgs, args: SimilarVerticesArgs) -> anyhow::Result<()> {
    let ctx = RunContext::load(global, None, None)?;
    let threshold = args
        .threshold
        .unwrap_or(ctx.config.pairs.similar_vertex_threshold);
    if !(-1.0..=1.0).contains(&threshold) {
        anyhow::bail!("--threshold must be between -1.0 and 1.0, got {threshold}");
    }
    let (subjects, objects) = semclust_io::read_vertex_columns(&args.edges)?;

    let mut pairs = similar_vertices(&ctx.engine, &subjects, threshold)?;
    let subject_pairs = pairs.len();
    pairs.extend(similar_vertices(&ctx.engine, &objects, threshold)?);
    semclust_io::write_pairs(&args.out, &pairs)?;

    info!(
        threshold,
        subject_pairs,
        object_pairs = pairs.len() - subject_pairs,
        out = %args.out.display(),
        "similar vertices written"
    );
    Ok(())
}
