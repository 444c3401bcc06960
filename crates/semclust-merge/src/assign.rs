//! Variable-to-cluster assignment and variable edge attachment.
//!
//! Variables arrive already normalized (see `semclust_embeddings::normalize`).

use semclust_clustering::{group_nodes_by_cluster, KMeans, PcaProjection};
use semclust_core::config::ClusteringConfig;
use semclust_core::constants::{IMPLEMENTS_VERB, NO_BEST_SIMILARITY};
use semclust_core::errors::{MergeError, SemclustResult};
use semclust_core::models::{ClusterAssignment, ClusteredGroup, Triple, VariableAssignment};
use semclust_core::similarity::mean;
use semclust_core::traits::{IClusterer, IProjection};
use semclust_embeddings::EmbeddingEngine;
use tracing::{debug, info};

use crate::representatives::RepresentativeTable;

/// Mean similarity of `vector` to every member embedding. NaN for no members.
fn average_similarity(engine: &EmbeddingEngine, vector: &[f32], members: &[Vec<f32>]) -> f64 {
    let sims: Vec<f64> = members
        .iter()
        .map(|m| engine.vector_similarity(vector, m))
        .collect();
    mean(&sims).unwrap_or(f64::NAN)
}

/// Assign each variable to the non-empty group with the highest mean
/// similarity. Strict `>`, so the first best group wins ties.
pub fn assign_by_similarity(
    engine: &EmbeddingEngine,
    groups: &[ClusteredGroup],
    variables: &[String],
) -> SemclustResult<Vec<VariableAssignment>> {
    if groups.iter().all(ClusteredGroup::is_empty) {
        return Err(MergeError::NoClusters.into());
    }
    let member_vectors = groups
        .iter()
        .map(|g| engine.embed_all(&g.nodes))
        .collect::<SemclustResult<Vec<_>>>()?;

    let mut out = Vec::with_capacity(variables.len());
    for variable in variables {
        let v = engine.embed(variable)?;
        let mut best = NO_BEST_SIMILARITY;
        let mut best_cluster = 0usize;
        for (idx, members) in member_vectors.iter().enumerate() {
            if members.is_empty() {
                continue;
            }
            let avg = average_similarity(engine, &v, members);
            if avg > best {
                best = avg;
                best_cluster = idx;
            }
        }
        out.push(VariableAssignment {
            variable: variable.clone(),
            cluster: best_cluster,
            average_similarity: best,
        });
    }
    info!(variables = out.len(), groups = groups.len(), "variables assigned by similarity");
    Ok(out)
}

/// Output of the classifier strategy.
#[derive(Debug, Clone)]
pub struct KMeansAssignment {
    /// Reference node → k-means training cluster.
    pub training: ClusterAssignment,
    /// Groups formed by the training clusters, carrying the reference ratios.
    pub groups: Vec<ClusteredGroup>,
    pub assignments: Vec<VariableAssignment>,
}

/// Classifier strategy: project the reference nodes, fit k-means with one
/// centroid per reference group, project the variables through the same
/// projection and predict.
///
/// `k` is the largest reference label plus one, so the highest-numbered
/// group gets its own centroid (using the largest label itself as `k`
/// would fold that group into the others).
///
/// Noise rows of `reference` are dropped first. Each variable's average
/// similarity is taken against the members of the training cluster it was
/// predicted into (NaN when that cluster ended up empty).
pub fn assign_by_kmeans(
    engine: &EmbeddingEngine,
    reference: &ClusterAssignment,
    ratios: &[f64],
    variables: &[String],
    config: &ClusteringConfig,
) -> SemclustResult<KMeansAssignment> {
    if ratios.len() != reference.len() {
        return Err(MergeError::LengthMismatch {
            what: "reference ratios".to_string(),
            expected: reference.len(),
            actual: ratios.len(),
        }
        .into());
    }
    let (nodes, kept_ratios): (Vec<_>, Vec<_>) = reference
        .nodes()
        .iter()
        .zip(reference.labels())
        .zip(ratios)
        .filter(|((_, l), _)| !l.is_noise())
        .map(|((n, l), r)| ((n.clone(), *l), *r))
        .unzip();
    let reference = {
        let (names, labels): (Vec<_>, Vec<_>) = nodes.into_iter().unzip();
        ClusterAssignment::new(names, labels)?
    };
    let k = reference.max_cluster_index().ok_or(MergeError::NoClusters)? + 1;

    let reference_vectors = engine.embed_all(reference.nodes())?;
    let variable_vectors = engine.embed_all(variables)?;

    let mut projection = PcaProjection::new(
        config.projection_dims,
        config.projection_iterations,
        config.seed,
    );
    let train_points = projection.fit_transform(&reference_vectors)?;
    let variable_points = projection.transform(&variable_vectors)?;

    let mut kmeans = KMeans::new(k, config.seed, config.kmeans_max_iterations, config.kmeans_tolerance)?;
    let train_labels = kmeans.fit(&train_points)?;
    let predicted = kmeans.predict(&variable_points)?;
    debug!(k, reference = reference.len(), variables = variables.len(), "kmeans classifier fitted");

    let training = ClusterAssignment::new(reference.nodes().to_vec(), train_labels)?;
    let groups = group_nodes_by_cluster(&training, &kept_ratios)?;

    let members_by_cluster: Vec<Vec<Vec<f32>>> = (0..k)
        .map(|c| {
            training
                .labels()
                .iter()
                .zip(&reference_vectors)
                .filter(|(l, _)| l.index() == Some(c))
                .map(|(_, v)| v.clone())
                .collect()
        })
        .collect();

    let assignments = variables
        .iter()
        .zip(&variable_vectors)
        .zip(&predicted)
        .map(|((variable, v), label)| {
            let cluster = label.index().unwrap_or(0);
            let members = members_by_cluster.get(cluster).map_or(&[][..], Vec::as_slice);
            VariableAssignment {
                variable: variable.clone(),
                cluster,
                average_similarity: average_similarity(engine, v, members),
            }
        })
        .collect::<Vec<_>>();

    info!(variables = assignments.len(), k, "variables assigned by kmeans");
    Ok(KMeansAssignment {
        training,
        groups,
        assignments,
    })
}

/// Append `(variable, implements, representative)` for each assignment whose
/// average similarity is strictly above `variable_threshold`. Returns the
/// number of edges added.
pub fn attach_variable_edges(
    edges: &mut Vec<Triple>,
    assignments: &[VariableAssignment],
    representatives: &RepresentativeTable,
    variable_threshold: f64,
) -> Result<usize, MergeError> {
    let mut added = 0;
    for a in assignments.iter().filter(|a| a.passes(variable_threshold)) {
        let rep = representatives.get(a.cluster)?;
        edges.push(Triple::new(a.variable.clone(), IMPLEMENTS_VERB, rep.clone()));
        added += 1;
    }
    debug!(
        candidates = assignments.len(),
        attached = added,
        variable_threshold,
        "variable edges attached"
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representatives::representatives_for_all;
    use semclust_core::models::Label;
    use semclust_core::traits::IEmbeddingProvider;

    struct TableEmbedder;

    impl IEmbeddingProvider for TableEmbedder {
        fn embed(&self, text: &str) -> SemclustResult<Vec<f32>> {
            Ok(match text {
                "flu" => vec![1.0, 0.0, 0.0],
                "cold" => vec![0.9, 0.1, 0.0],
                "fever" => vec![0.8, 0.2, 0.0],
                "rock" => vec![0.0, 0.0, 1.0],
                "stone" => vec![0.0, 0.1, 0.9],
                "illness" => vec![0.95, 0.05, 0.0],
                "pebble" => vec![0.0, 0.05, 0.95],
                _ => vec![0.0, 1.0, 0.0],
            })
        }
        fn dimensions(&self) -> usize { 3 }
        fn name(&self) -> &str { "table" }
        fn is_available(&self) -> bool { true }
    }

    fn engine() -> EmbeddingEngine {
        EmbeddingEngine::with_provider(Box::new(TableEmbedder), 100)
    }

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn groups() -> Vec<ClusteredGroup> {
        let mut sick = ClusteredGroup::new(Label(0));
        for (n, r) in [("flu", 0.9), ("cold", 0.8), ("fever", 0.7)] {
            sick.push(n.to_string(), r);
        }
        let mut geo = ClusteredGroup::new(Label(1));
        for (n, r) in [("rock", 0.6), ("stone", 0.6)] {
            geo.push(n.to_string(), r);
        }
        vec![sick, ClusteredGroup::new(Label(2)), geo]
    }

    #[test]
    fn similarity_strategy_picks_best_non_empty_group() {
        let out = assign_by_similarity(&engine(), &groups(), &strings(&["illness", "pebble"])).unwrap();
        assert_eq!(out[0].cluster, 0);
        assert_eq!(out[1].cluster, 2);
        assert!(out[0].average_similarity > 0.9);
    }

    #[test]
    fn similarity_strategy_without_groups_fails() {
        let err = assign_by_similarity(&engine(), &[ClusteredGroup::new(Label(0))], &strings(&["x"]));
        assert!(err.is_err());
    }

    #[test]
    fn attach_only_above_threshold() {
        let table = representatives_for_all(&groups());
        let assignments = vec![
            VariableAssignment { variable: "illness".into(), cluster: 0, average_similarity: 0.95 },
            VariableAssignment { variable: "pebble".into(), cluster: 2, average_similarity: 0.5 },
        ];
        let mut edges = Vec::new();
        let added = attach_variable_edges(&mut edges, &assignments, &table, 0.5).unwrap();
        assert_eq!(added, 1);
        assert_eq!(edges, vec![Triple::new("illness", "implements", "flu")]);
    }

    #[test]
    fn attach_to_empty_group_fails() {
        let table = representatives_for_all(&groups());
        let assignments = vec![VariableAssignment {
            variable: "v".into(),
            cluster: 1,
            average_similarity: 0.9,
        }];
        let err = attach_variable_edges(&mut Vec::new(), &assignments, &table, 0.5).unwrap_err();
        assert!(matches!(err, MergeError::UnknownCluster { index: 1, .. }));
    }

    #[test]
    fn kmeans_strategy_groups_follow_training_clusters() {
        let reference = ClusterAssignment::new(
            strings(&["flu", "cold", "fever", "rock", "stone", "noise"]),
            vec![Label(0), Label(0), Label(0), Label(1), Label(1), Label::NOISE],
        )
        .unwrap();
        let ratios = vec![0.9, 0.8, 0.7, 0.6, 0.6, 0.0];
        let out = assign_by_kmeans(
            &engine(),
            &reference,
            &ratios,
            &strings(&["illness", "pebble"]),
            &ClusteringConfig::default(),
        )
        .unwrap();

        assert_eq!(out.training.len(), 5);
        assert_eq!(out.groups.len(), 2);
        let total: usize = out.groups.iter().map(ClusteredGroup::len).sum();
        assert_eq!(total, 5);

        let illness = &out.assignments[0];
        let pebble = &out.assignments[1];
        assert_ne!(illness.cluster, pebble.cluster);
        assert!(out.groups[illness.cluster].nodes.contains(&"flu".to_string()));
        assert!(out.groups[pebble.cluster].nodes.contains(&"rock".to_string()));
        assert!(illness.average_similarity > 0.9);
    }

    #[test]
    fn kmeans_strategy_with_only_noise_fails() {
        let reference = ClusterAssignment::new(strings(&["a"]), vec![Label::NOISE]).unwrap();
        let out = assign_by_kmeans(&engine(), &reference, &[0.0], &strings(&["x"]), &ClusteringConfig::default());
        assert!(out.is_err());
    }
}
