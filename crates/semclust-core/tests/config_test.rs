use std::collections::HashMap;

use semclust_core::config::*;
use semclust_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SemclustConfig::from_toml("").unwrap();

    // Embedding defaults
    assert_eq!(config.embedding.provider, EmbeddingProviderKind::WordVectors);
    assert_eq!(config.embedding.vectors_path, None);
    assert_eq!(config.embedding.dimensions, 300);

    // Clustering defaults
    assert_eq!(config.clustering.density_algorithm, DensityAlgorithm::Dbscan);
    assert_eq!(config.clustering.dbscan_eps, 0.3);
    assert_eq!(config.clustering.dbscan_min_samples, 2);
    assert_eq!(config.clustering.seed, 42);
    assert_eq!(config.clustering.peerless_policy, PeerlessPolicy::Zero);

    // Merge defaults
    assert_eq!(config.merge.selector(), MetricSelector::default());
    assert_eq!(config.merge.assignment_strategy, AssignmentStrategy::Kmeans);

    // Pairs defaults
    assert_eq!(config.pairs.similar_vertex_threshold, 0.85);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[clustering]
density_algorithm = "hdbscan"
peerless_policy = "nan"

[merge]
cluster_threshold = 0.7
metric = "out-of-sample"
label_source = "raw"
"#;
    let config = SemclustConfig::from_toml(toml).unwrap();
    assert_eq!(config.clustering.density_algorithm, DensityAlgorithm::Hdbscan);
    assert_eq!(config.clustering.peerless_policy, PeerlessPolicy::Nan);
    assert_eq!(config.clustering.dbscan_eps, 0.3);
    assert_eq!(config.merge.cluster_threshold, 0.7);
    assert_eq!(config.merge.metric, SimilarityMetric::OutOfSample);
    assert_eq!(config.merge.label_source, LabelSource::Raw);
    assert_eq!(config.merge.variable_threshold, 0.5);
}

#[test]
fn unknown_enum_value_is_a_parse_error() {
    let err = SemclustConfig::from_toml("[embedding]\nprovider = \"bert\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_out_of_range_threshold() {
    let mut config = SemclustConfig::default();
    config.merge.cluster_threshold = 1.5;
    let err = SemclustConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "merge.cluster_threshold"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_rejects_non_positive_eps() {
    let mut config = SemclustConfig::default();
    config.clustering.dbscan_eps = 0.0;
    assert!(SemclustConfig::validate(&config).is_err());
    config.clustering.dbscan_eps = f64::NAN;
    assert!(SemclustConfig::validate(&config).is_err());
}

#[test]
fn env_overrides_apply_and_skip_garbage() {
    let env: HashMap<&str, &str> = [
        ("SEMCLUST_CLUSTER_THRESHOLD", "0.9"),
        ("SEMCLUST_DBSCAN_EPS", "not-a-number"),
        ("SEMCLUST_EMBEDDING_PROVIDER", "tfidf"),
    ]
    .into_iter()
    .collect();

    let mut config = SemclustConfig::default();
    SemclustConfig::apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.merge.cluster_threshold, 0.9);
    assert_eq!(config.clustering.dbscan_eps, 0.3);
    assert_eq!(config.embedding.provider, EmbeddingProviderKind::Tfidf);
}

#[test]
fn cli_overrides_win_over_file_values() {
    let mut config = SemclustConfig::from_toml("[merge]\nvariable_threshold = 0.2\n").unwrap();
    let cli = CliOverrides {
        variable_threshold: Some(0.6),
        assignment_strategy: Some(AssignmentStrategy::Similarity),
        ..Default::default()
    };
    SemclustConfig::apply_cli_overrides(&mut config, &cli);
    assert_eq!(config.merge.variable_threshold, 0.6);
    assert_eq!(config.merge.assignment_strategy, AssignmentStrategy::Similarity);
}

#[test]
fn load_reads_project_file_from_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("semclust.toml"),
        "[pairs]\nsimilar_vertex_threshold = 0.8\n",
    )
    .unwrap();
    let config = SemclustConfig::load(dir.path(), None, None).unwrap();
    assert_eq!(config.pairs.similar_vertex_threshold, 0.8);
}

#[test]
fn load_with_missing_explicit_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = SemclustConfig::load(dir.path(), Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = SemclustConfig::default();
    config.merge.cluster_threshold = 0.65;
    let text = config.to_toml().unwrap();
    let back = SemclustConfig::from_toml(&text).unwrap();
    assert_eq!(back.merge.cluster_threshold, 0.65);
    assert_eq!(back.clustering.density_algorithm, DensityAlgorithm::Dbscan);
}
