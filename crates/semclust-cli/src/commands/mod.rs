//! Subcommand handlers and the run setup they share.

pub mod assign;
pub mod cluster;
pub mod merge;
pub mod pairs;
pub mod score;
pub mod sweep;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use semclust_core::config::{
    AssignmentStrategy, CliOverrides, DensityAlgorithm, EmbeddingProviderKind, SemclustConfig,
};
use semclust_embeddings::EmbeddingEngine;
use tracing::info;

/// Flags accepted by every subcommand. They override the config file and
/// `SEMCLUST_*` environment values.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file (default: ./semclust.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum cluster similarity for a merge
    #[arg(long, global = true)]
    pub cluster_threshold: Option<f64>,

    /// Minimum average similarity for attaching a variable
    #[arg(long, global = true)]
    pub variable_threshold: Option<f64>,

    /// Embedding provider: word-vectors or tfidf
    #[arg(long, global = true)]
    pub provider: Option<EmbeddingProviderKind>,

    /// Word vector table for the word-vectors provider
    #[arg(long, global = true, value_name = "PATH")]
    pub vectors: Option<PathBuf>,
}

impl GlobalArgs {
    fn overrides(
        &self,
        density_algorithm: Option<DensityAlgorithm>,
        assignment_strategy: Option<AssignmentStrategy>,
    ) -> CliOverrides {
        CliOverrides {
            provider: self.provider,
            vectors_path: self.vectors.as_ref().map(|p| p.display().to_string()),
            cluster_threshold: self.cluster_threshold,
            variable_threshold: self.variable_threshold,
            density_algorithm,
            assignment_strategy,
        }
    }
}

/// Resolved configuration plus the embedding engine for one run.
pub struct RunContext {
    pub config: SemclustConfig,
    pub engine: EmbeddingEngine,
}

impl RunContext {
    pub fn load(
        global: &GlobalArgs,
        density_algorithm: Option<DensityAlgorithm>,
        assignment_strategy: Option<AssignmentStrategy>,
    ) -> anyhow::Result<Self> {
        let config = load_config(global, density_algorithm, assignment_strategy)?;
        let engine = EmbeddingEngine::new(&config.embedding);
        info!(
            provider = engine.active_provider(),
            dimensions = engine.dimensions(),
            "embedding engine ready"
        );
        Ok(Self { config, engine })
    }
}

pub fn load_config(
    global: &GlobalArgs,
    density_algorithm: Option<DensityAlgorithm>,
    assignment_strategy: Option<AssignmentStrategy>,
) -> anyhow::Result<SemclustConfig> {
    let root = std::env::current_dir().context("cannot resolve working directory")?;
    let overrides = global.overrides(density_algorithm, assignment_strategy);
    SemclustConfig::load(&root, global.config.as_deref(), Some(&overrides))
        .context("loading configuration")
}
