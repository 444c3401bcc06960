//! Top-level semclust configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    defaults, AssignmentStrategy, ClusteringConfig, DensityAlgorithm, EmbeddingConfig,
    EmbeddingProviderKind, MergeConfig, PairsConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SEMCLUST_*`)
/// 3. Config file (`--config` path, else `semclust.toml` in the working root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SemclustConfig {
    pub embedding: EmbeddingConfig,
    pub clustering: ClusteringConfig,
    pub merge: MergeConfig,
    pub pairs: PairsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub provider: Option<EmbeddingProviderKind>,
    pub vectors_path: Option<String>,
    pub cluster_threshold: Option<f64>,
    pub variable_threshold: Option<f64>,
    pub density_algorithm: Option<DensityAlgorithm>,
    pub assignment_strategy: Option<AssignmentStrategy>,
}

impl SemclustConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `semclust.toml` in
    /// `root` is used when present.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(defaults::DEFAULT_CONFIG_FILENAME);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        debug!(path = %path.display(), "loading config file");
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SemclustConfig) -> Result<(), ConfigError> {
        check_similarity("merge.cluster_threshold", config.merge.cluster_threshold)?;
        check_similarity("merge.variable_threshold", config.merge.variable_threshold)?;
        check_similarity(
            "pairs.similar_vertex_threshold",
            config.pairs.similar_vertex_threshold,
        )?;

        let c = &config.clustering;
        if !c.dbscan_eps.is_finite() || c.dbscan_eps <= 0.0 {
            return Err(invalid("clustering.dbscan_eps", "must be a finite number > 0"));
        }
        if c.dbscan_min_samples == 0 {
            return Err(invalid("clustering.dbscan_min_samples", "must be greater than 0"));
        }
        if c.hdbscan_min_cluster_size < 2 {
            return Err(invalid("clustering.hdbscan_min_cluster_size", "must be at least 2"));
        }
        if c.projection_dims == 0 {
            return Err(invalid("clustering.projection_dims", "must be greater than 0"));
        }
        if c.projection_iterations == 0 || c.kmeans_max_iterations == 0 {
            return Err(invalid("clustering", "iteration limits must be greater than 0"));
        }
        if c.kmeans_tolerance.is_nan() || c.kmeans_tolerance <= 0.0 {
            return Err(invalid("clustering.kmeans_tolerance", "must be greater than 0"));
        }

        if config.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if config.embedding.cache_size == 0 {
            return Err(invalid("embedding.cache_size", "must be greater than 0"));
        }
        Ok(())
    }

    /// Apply environment variable overrides read through `lookup`.
    /// Pattern: `SEMCLUST_CLUSTER_THRESHOLD`, `SEMCLUST_DBSCAN_EPS`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(config: &mut SemclustConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SEMCLUST_EMBEDDING_PROVIDER").and_then(|v| v.parse().ok()) {
            config.embedding.provider = v;
        }
        if let Some(v) = lookup("SEMCLUST_VECTORS_PATH") {
            config.embedding.vectors_path = Some(v);
        }
        if let Some(v) = lookup("SEMCLUST_CLUSTER_THRESHOLD").and_then(|v| v.parse().ok()) {
            config.merge.cluster_threshold = v;
        }
        if let Some(v) = lookup("SEMCLUST_VARIABLE_THRESHOLD").and_then(|v| v.parse().ok()) {
            config.merge.variable_threshold = v;
        }
        if let Some(v) = lookup("SEMCLUST_DBSCAN_EPS").and_then(|v| v.parse().ok()) {
            config.clustering.dbscan_eps = v;
        }
        if let Some(v) = lookup("SEMCLUST_DBSCAN_MIN_SAMPLES").and_then(|v| v.parse().ok()) {
            config.clustering.dbscan_min_samples = v;
        }
        if let Some(v) = lookup("SEMCLUST_SEED").and_then(|v| v.parse().ok()) {
            config.clustering.seed = v;
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut SemclustConfig, cli: &CliOverrides) {
        if let Some(v) = cli.provider {
            config.embedding.provider = v;
        }
        if let Some(ref v) = cli.vectors_path {
            config.embedding.vectors_path = Some(v.clone());
        }
        if let Some(v) = cli.cluster_threshold {
            config.merge.cluster_threshold = v;
        }
        if let Some(v) = cli.variable_threshold {
            config.merge.variable_threshold = v;
        }
        if let Some(v) = cli.density_algorithm {
            config.clustering.density_algorithm = v;
        }
        if let Some(v) = cli.assignment_strategy {
            config.merge.assignment_strategy = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn check_similarity(field: &str, value: f64) -> Result<(), ConfigError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must be between -1.0 and 1.0"))
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
