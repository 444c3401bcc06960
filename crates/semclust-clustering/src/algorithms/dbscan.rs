//! DBSCAN over Euclidean distance.
//!
//! A point is core when at least `min_samples` points (itself included) lie
//! within `eps`. Clusters grow from cores in input order; points reachable
//! from no core are noise.

use std::collections::VecDeque;

use semclust_core::errors::{ClusteringError, SemclustResult};
use semclust_core::models::Label;
use semclust_core::similarity::euclidean_distance_squared;
use semclust_core::traits::IClusterer;
use tracing::debug;

use super::{check_dimensions, nearest};

#[derive(Debug, Clone)]
struct Fitted {
    points: Vec<Vec<f32>>,
    labels: Vec<Label>,
    core: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct Dbscan {
    eps: f64,
    min_samples: usize,
    fitted: Option<Fitted>,
}

impl Dbscan {
    pub fn new(eps: f64, min_samples: usize) -> Result<Self, ClusteringError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ClusteringError::invalid("eps", "must be a finite number > 0"));
        }
        if min_samples == 0 {
            return Err(ClusteringError::invalid("min_samples", "must be greater than 0"));
        }
        Ok(Self {
            eps,
            min_samples,
            fitted: None,
        })
    }

    fn region(&self, points: &[Vec<f32>], idx: usize) -> Vec<usize> {
        let eps_sq = self.eps * self.eps;
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| euclidean_distance_squared(&points[idx], p) <= eps_sq)
            .map(|(j, _)| j)
            .collect()
    }
}

impl IClusterer for Dbscan {
    fn fit(&mut self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>> {
        if let Some(first) = points.first() {
            check_dimensions(points, first.len())?;
        }
        let n = points.len();
        let neighbourhoods: Vec<Vec<usize>> = (0..n).map(|i| self.region(points, i)).collect();
        let core: Vec<bool> = neighbourhoods
            .iter()
            .map(|nb| nb.len() >= self.min_samples)
            .collect();

        let mut labels = vec![Label::NOISE; n];
        let mut visited = vec![false; n];
        let mut next_cluster = 0usize;

        for start in 0..n {
            if visited[start] || !core[start] {
                continue;
            }
            let label = Label::cluster(next_cluster);
            next_cluster += 1;

            let mut queue = VecDeque::from([start]);
            visited[start] = true;
            while let Some(i) = queue.pop_front() {
                labels[i] = label;
                if !core[i] {
                    continue;
                }
                for &j in &neighbourhoods[i] {
                    if !visited[j] {
                        visited[j] = true;
                        queue.push_back(j);
                    }
                }
            }
        }

        debug!(
            points = n,
            clusters = next_cluster,
            noise = labels.iter().filter(|l| l.is_noise()).count(),
            "dbscan fitted"
        );
        self.fitted = Some(Fitted {
            points: points.to_vec(),
            labels: labels.clone(),
            core,
        });
        Ok(labels)
    }

    /// Label of the nearest fitted core point within `eps`, else noise.
    fn predict(&self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>> {
        let fitted = self.fitted.as_ref().ok_or_else(|| ClusteringError::NotFitted {
            stage: "dbscan".to_string(),
        })?;
        if let Some(first) = fitted.points.first() {
            check_dimensions(points, first.len())?;
        }
        let eps_sq = self.eps * self.eps;
        let cores = fitted
            .points
            .iter()
            .enumerate()
            .filter(|(i, _)| fitted.core[*i]);

        Ok(points
            .iter()
            .map(|p| match nearest(p, cores.clone()) {
                Some((idx, d)) if d <= eps_sq => fitted.labels[idx],
                _ => Label::NOISE,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "dbscan"
    }
}
