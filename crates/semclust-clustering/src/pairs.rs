//! Vertex pair export and similar-vertex detection.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use semclust_core::errors::SemclustResult;
use semclust_core::models::{Node, VertexPair};
use semclust_embeddings::EmbeddingEngine;
use tracing::debug;

use crate::aggregation::similarity_matrix;

/// Unordered pairs of distinct phrases, subjects first then objects.
///
/// A pair already taken in either orientation is skipped, across both
/// columns.
pub fn unique_pairs(subjects: &[Node], objects: &[Node]) -> Vec<(Node, Node)> {
    let mut taken: HashSet<(&str, &str)> = HashSet::new();
    let mut pairs = Vec::new();
    for column in [subjects, objects] {
        for a in column {
            for b in column {
                if a == b {
                    continue;
                }
                if taken.contains(&(a.as_str(), b.as_str())) || taken.contains(&(b.as_str(), a.as_str())) {
                    continue;
                }
                taken.insert((a.as_str(), b.as_str()));
                pairs.push((a.clone(), b.clone()));
            }
        }
    }
    pairs
}

/// Every unique pair with its similarity, in seeded random order.
/// Phrases are trimmed in the output.
pub fn vertex_pairs(
    engine: &EmbeddingEngine,
    subjects: &[Node],
    objects: &[Node],
    seed: u64,
) -> SemclustResult<Vec<VertexPair>> {
    let mut pairs = unique_pairs(subjects, objects);
    pairs.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut out = Vec::with_capacity(pairs.len());
    for (a, b) in pairs {
        let similarity = engine.similarity(&a, &b)?;
        out.push(VertexPair {
            first: a.trim().to_string(),
            second: b.trim().to_string(),
            similarity,
        });
    }
    debug!(pairs = out.len(), "vertex pairs generated");
    Ok(out)
}

/// Index pairs within one column whose similarity exceeds `threshold` and is
/// not exactly 1. `(j, i)` is dropped once `(i, j)` is taken.
pub fn similar_vertices(
    engine: &EmbeddingEngine,
    column: &[Node],
    threshold: f64,
) -> SemclustResult<Vec<VertexPair>> {
    let embeddings = engine.embed_all(column)?;
    let matrix = similarity_matrix(engine, &embeddings);

    let mut taken: HashSet<(usize, usize)> = HashSet::new();
    let mut out = Vec::new();
    for i in 0..column.len() {
        for j in 0..column.len() {
            let s = if i == j { 0.0 } else { matrix[i][j] };
            if s > threshold && s != 1.0 && !taken.contains(&(j, i)) {
                taken.insert((i, j));
                out.push(VertexPair {
                    first: column[i].clone(),
                    second: column[j].clone(),
                    similarity: s,
                });
            }
        }
    }
    debug!(vertices = column.len(), pairs = out.len(), threshold, "similar vertices found");
    Ok(out)
}
