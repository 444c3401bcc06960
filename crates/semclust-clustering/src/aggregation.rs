//! Pair similarity aggregation.
//!
//! For every ordered pair `i != j`, the similarity of `i` and `j` counts
//! toward `i`'s in-sample sum when their labels match and toward its
//! out-of-sample sum otherwise. Sums are then divided by the number of
//! same-label peers (`count(label_i) - 1`) and other-label rows
//! (`n - count(label_i)`). Noise is treated as one more label value here.

use std::collections::HashMap;

use rayon::prelude::*;
use semclust_core::config::PeerlessPolicy;
use semclust_core::constants::NO_OUTSIDE_GROUP_SIMILARITY;
use semclust_core::errors::ClusteringError;
use semclust_core::models::{Label, SimilarityScores};
use semclust_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Full pairwise similarity matrix under `embedder`'s similarity function,
/// computed row-parallel.
pub fn similarity_matrix<E>(embedder: &E, data: &[Vec<f32>]) -> Vec<Vec<f64>>
where
    E: IEmbeddingProvider + ?Sized,
{
    data.par_iter()
        .map(|a| data.iter().map(|b| embedder.similarity(a, b)).collect())
        .collect()
}

/// In-sample and out-of-sample similarity for one label assignment.
pub fn aggregate<E>(
    embedder: &E,
    labels: &[Label],
    data: &[Vec<f32>],
    policy: PeerlessPolicy,
) -> Result<SimilarityScores, ClusteringError>
where
    E: IEmbeddingProvider + ?Sized,
{
    check_len("aggregation embeddings", labels.len(), data.len())?;
    let matrix = similarity_matrix(embedder, data);
    aggregate_with_matrix(labels, &matrix, policy)
}

/// Scores for both the raw and the projected assignment over one shared
/// similarity matrix.
pub fn aggregate_both<E>(
    embedder: &E,
    raw: &[Label],
    projected: &[Label],
    data: &[Vec<f32>],
    policy: PeerlessPolicy,
) -> Result<(SimilarityScores, SimilarityScores), ClusteringError>
where
    E: IEmbeddingProvider + ?Sized,
{
    check_len("aggregation embeddings", raw.len(), data.len())?;
    check_len("projected labels", projected.len(), data.len())?;
    let matrix = similarity_matrix(embedder, data);
    Ok((
        aggregate_with_matrix(raw, &matrix, policy)?,
        aggregate_with_matrix(projected, &matrix, policy)?,
    ))
}

/// Aggregate against a precomputed similarity matrix.
pub fn aggregate_with_matrix(
    labels: &[Label],
    matrix: &[Vec<f64>],
    policy: PeerlessPolicy,
) -> Result<SimilarityScores, ClusteringError> {
    check_len("similarity matrix", labels.len(), matrix.len())?;
    let n = labels.len();
    if let Some(row) = matrix.iter().find(|row| row.len() != n) {
        return Err(ClusteringError::LengthMismatch {
            what: "similarity matrix row".to_string(),
            left: n,
            right: row.len(),
        });
    }

    let mut counts: HashMap<Label, usize> = HashMap::new();
    for &l in labels {
        *counts.entry(l).or_insert(0) += 1;
    }

    let (in_sample, out_of_sample): (Vec<f64>, Vec<f64>) = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut inside = 0.0;
            let mut outside = 0.0;
            for j in 0..n {
                if i == j {
                    continue;
                }
                if labels[i] == labels[j] {
                    inside += matrix[i][j];
                } else {
                    outside += matrix[i][j];
                }
            }
            let same = counts.get(&labels[i]).copied().unwrap_or(1);
            let peers = same - 1;
            let others = n - same;
            let in_avg = if peers == 0 {
                policy.value()
            } else {
                inside / peers as f64
            };
            let out_avg = if others == 0 {
                NO_OUTSIDE_GROUP_SIMILARITY
            } else {
                outside / others as f64
            };
            (in_avg, out_avg)
        })
        .unzip();

    debug!(rows = n, labels = counts.len(), "similarity aggregated");
    Ok(SimilarityScores {
        in_sample,
        out_of_sample,
    })
}

fn check_len(what: &str, left: usize, right: usize) -> Result<(), ClusteringError> {
    if left == right {
        Ok(())
    } else {
        Err(ClusteringError::LengthMismatch {
            what: what.to_string(),
            left,
            right,
        })
    }
}
