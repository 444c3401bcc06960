//! Property tests for grouping, aggregation and the clusterers.

use proptest::prelude::*;

use semclust_clustering::{aggregate, group_nodes_by_cluster, Dbscan, KMeans};
use semclust_core::config::PeerlessPolicy;
use semclust_core::errors::SemclustResult;
use semclust_core::models::{ClusterAssignment, Label};
use semclust_core::traits::{IClusterer, IEmbeddingProvider};

struct TestEmbedder;

impl IEmbeddingProvider for TestEmbedder {
    fn embed(&self, text: &str) -> SemclustResult<Vec<f32>> {
        let hash = blake3::hash(text.as_bytes());
        let bytes = hash.as_bytes();
        Ok((0..16).map(|i| bytes[i] as f32 / 255.0).collect())
    }
    fn dimensions(&self) -> usize { 16 }
    fn name(&self) -> &str { "test" }
    fn is_available(&self) -> bool { true }
}

fn labels_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1i32..4, 1..24)
}

proptest! {
    #[test]
    fn grouping_partitions_non_noise_rows(raw in labels_strategy()) {
        let nodes: Vec<String> = (0..raw.len()).map(|i| format!("n{i}")).collect();
        let labels: Vec<Label> = raw.iter().map(|&l| Label::from(l)).collect();
        let ratios: Vec<f64> = (0..raw.len()).map(|i| i as f64).collect();
        let assignment = ClusterAssignment::new(nodes, labels.clone()).unwrap();

        let groups = group_nodes_by_cluster(&assignment, &ratios).unwrap();
        let grouped: usize = groups.iter().map(|g| g.len()).sum();
        let noise = labels.iter().filter(|l| l.is_noise()).count();
        prop_assert_eq!(grouped + noise, raw.len());

        let mut seen = std::collections::HashSet::new();
        for (idx, g) in groups.iter().enumerate() {
            prop_assert_eq!(g.label, Label::cluster(idx));
            for n in &g.nodes {
                prop_assert!(seen.insert(n.clone()), "node {} in two groups", n);
            }
        }
    }

    #[test]
    fn aggregation_is_bounded(raw in labels_strategy()) {
        let embedder = TestEmbedder;
        let texts: Vec<String> = (0..raw.len()).map(|i| format!("phrase {i}")).collect();
        let data = embedder.embed_batch(&texts).unwrap();
        let labels: Vec<Label> = raw.iter().map(|&l| Label::from(l)).collect();

        let scores = aggregate(&embedder, &labels, &data, PeerlessPolicy::Zero).unwrap();
        prop_assert_eq!(scores.len(), raw.len());
        for (&a, &b) in scores.in_sample.iter().zip(&scores.out_of_sample) {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&a));
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&b));
        }
    }

    #[test]
    fn dbscan_is_deterministic(seed in 0u64..500) {
        let embedder = TestEmbedder;
        let texts: Vec<String> = (0..12).map(|i| format!("{seed}-{i}")).collect();
        let data = embedder.embed_batch(&texts).unwrap();
        let mut a = Dbscan::new(0.9, 2).unwrap();
        let mut b = Dbscan::new(0.9, 2).unwrap();
        prop_assert_eq!(a.fit(&data).unwrap(), b.fit(&data).unwrap());
    }

    #[test]
    fn kmeans_labels_stay_below_k(k in 1usize..5, seed in 0u64..100) {
        let embedder = TestEmbedder;
        let texts: Vec<String> = (0..10).map(|i| format!("node {i}")).collect();
        let data = embedder.embed_batch(&texts).unwrap();
        let mut km = KMeans::new(k, seed, 50, 1e-4).unwrap();
        let labels = km.fit(&data).unwrap();
        prop_assert!(labels.iter().all(|l| l.index().is_some_and(|i| i < k)));
    }
}
