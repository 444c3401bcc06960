use criterion::{criterion_group, criterion_main, Criterion};
use semclust_clustering::aggregate;
use semclust_core::config::PeerlessPolicy;
use semclust_core::errors::SemclustResult;
use semclust_core::models::Label;
use semclust_core::traits::IEmbeddingProvider;

/// Precomputed points only; similarity is the default cosine.
struct Precomputed;

impl IEmbeddingProvider for Precomputed {
    fn embed(&self, _text: &str) -> SemclustResult<Vec<f32>> {
        Ok(Vec::new())
    }
    fn dimensions(&self) -> usize {
        64
    }
    fn name(&self) -> &str {
        "precomputed"
    }
    fn is_available(&self) -> bool {
        true
    }
}

fn data(n: usize, dims: usize) -> Vec<Vec<f32>> {
    (0..n)
        .map(|i| {
            let hash = blake3::hash(format!("node {i}").as_bytes());
            let bytes = hash.as_bytes();
            (0..dims).map(|d| bytes[d % 32] as f32 / 255.0).collect()
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let points = data(400, 64);
    let labels: Vec<Label> = (0..points.len()).map(|i| Label::cluster(i % 7)).collect();

    c.bench_function("aggregate_400x64", |b| {
        b.iter(|| aggregate(&Precomputed, &labels, &points, PeerlessPolicy::Zero).unwrap())
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
