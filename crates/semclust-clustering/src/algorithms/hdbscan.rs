//! HDBSCAN backed by the `hdbscan` crate.

use std::collections::HashMap;

use ::hdbscan::{Hdbscan, HdbscanHyperParams};
use semclust_core::errors::{ClusteringError, SemclustResult};
use semclust_core::models::Label;
use semclust_core::traits::IClusterer;
use tracing::debug;

use super::{check_dimensions, nearest};

#[derive(Debug, Clone)]
pub struct HdbscanClusterer {
    min_cluster_size: usize,
    min_samples: usize,
    fitted: Option<(Vec<Vec<f32>>, Vec<Label>)>,
}

impl HdbscanClusterer {
    pub fn new(min_cluster_size: usize, min_samples: usize) -> Result<Self, ClusteringError> {
        if min_cluster_size < 2 {
            return Err(ClusteringError::invalid("min_cluster_size", "must be at least 2"));
        }
        if min_samples == 0 {
            return Err(ClusteringError::invalid("min_samples", "must be greater than 0"));
        }
        Ok(Self {
            min_cluster_size,
            min_samples,
            fitted: None,
        })
    }
}

/// Renumber cluster ids to 0.. in order of first appearance.
fn compact(raw: &[i32]) -> Vec<Label> {
    let mut ids: HashMap<i32, usize> = HashMap::new();
    raw.iter()
        .map(|&l| {
            if l < 0 {
                Label::NOISE
            } else {
                let next = ids.len();
                Label::cluster(*ids.entry(l).or_insert(next))
            }
        })
        .collect()
}

impl IClusterer for HdbscanClusterer {
    fn fit(&mut self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>> {
        if let Some(first) = points.first() {
            check_dimensions(points, first.len())?;
        }
        let labels = if points.len() < self.min_cluster_size {
            vec![Label::NOISE; points.len()]
        } else {
            let hyper_params = HdbscanHyperParams::builder()
                .min_cluster_size(self.min_cluster_size)
                .min_samples(self.min_samples.min(points.len()))
                .build();
            let features = points.to_vec();
            let raw = Hdbscan::new(&features, hyper_params)
                .cluster()
                .map_err(|e| ClusteringError::BackendFailed {
                    reason: format!("{e:?}"),
                })?;
            compact(&raw)
        };

        debug!(
            points = points.len(),
            clusters = labels.iter().filter_map(|l| l.index()).max().map_or(0, |m| m + 1),
            "hdbscan fitted"
        );
        self.fitted = Some((points.to_vec(), labels.clone()));
        Ok(labels)
    }

    /// Label of the nearest fitted non-noise point; noise when every fitted
    /// point was noise.
    fn predict(&self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>> {
        let (fitted, labels) = self.fitted.as_ref().ok_or_else(|| ClusteringError::NotFitted {
            stage: "hdbscan".to_string(),
        })?;
        if let Some(first) = fitted.first() {
            check_dimensions(points, first.len())?;
        }
        let members = fitted
            .iter()
            .enumerate()
            .filter(|(i, _)| !labels[*i].is_noise());
        Ok(points
            .iter()
            .map(|p| nearest(p, members.clone()).map_or(Label::NOISE, |(idx, _)| labels[idx]))
            .collect())
    }

    fn name(&self) -> &str {
        "hdbscan"
    }
}
