//! K-means with k-means++ seeding and Lloyd iterations.
//!
//! Seeding draws from a `StdRng` built from the configured seed, so a fixed
//! seed gives identical centroids and labels on every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use semclust_core::errors::{ClusteringError, SemclustResult};
use semclust_core::models::Label;
use semclust_core::similarity::euclidean_distance_squared;
use semclust_core::traits::IClusterer;
use tracing::{debug, warn};

use super::check_dimensions;

#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    seed: u64,
    max_iterations: usize,
    tolerance: f64,
    centroids: Option<Vec<Vec<f32>>>,
}

impl KMeans {
    pub fn new(
        k: usize,
        seed: u64,
        max_iterations: usize,
        tolerance: f64,
    ) -> Result<Self, ClusteringError> {
        if k == 0 {
            return Err(ClusteringError::invalid("k", "must be greater than 0"));
        }
        if max_iterations == 0 {
            return Err(ClusteringError::invalid("max_iterations", "must be greater than 0"));
        }
        Ok(Self {
            k,
            seed,
            max_iterations,
            tolerance,
            centroids: None,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn centroids(&self) -> Option<&[Vec<f32>]> {
        self.centroids.as_deref()
    }
}

/// Index of the nearest centroid. First minimum wins ties.
fn closest(point: &[f32], centroids: &[Vec<f32>]) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (j, c) in centroids.iter().enumerate() {
        let d = euclidean_distance_squared(point, c);
        if d < best_d {
            best_d = d;
            best = j;
        }
    }
    best
}

/// k-means++: first centroid uniform, each next one drawn with probability
/// proportional to squared distance from the nearest chosen centroid.
fn plus_plus_init(points: &[Vec<f32>], k: usize, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let n = points.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..n)].clone());

    let mut min_dist = vec![f64::INFINITY; n];
    while centroids.len() < k {
        if let Some(last) = centroids.last() {
            for (d, p) in min_dist.iter_mut().zip(points) {
                *d = d.min(euclidean_distance_squared(p, last));
            }
        }
        let total: f64 = min_dist.iter().sum();
        let next = if total <= 0.0 {
            // Every point coincides with a centroid already.
            rng.gen_range(0..n)
        } else {
            let target = rng.gen::<f64>() * total;
            let mut acc = 0.0;
            min_dist
                .iter()
                .position(|&d| {
                    acc += d;
                    acc > target
                })
                .unwrap_or(n - 1)
        };
        centroids.push(points[next].clone());
    }
    centroids
}

/// Mean of the points assigned to each centroid. An empty cluster keeps its
/// previous centroid.
fn recompute(points: &[Vec<f32>], assignments: &[usize], previous: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let width = previous.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0f64; width]; previous.len()];
    let mut counts = vec![0usize; previous.len()];
    for (p, &c) in points.iter().zip(assignments) {
        counts[c] += 1;
        for (s, &x) in sums[c].iter_mut().zip(p) {
            *s += x as f64;
        }
    }
    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((sum, count), prev)| {
            if count == 0 {
                prev.clone()
            } else {
                sum.into_iter().map(|s| (s / count as f64) as f32).collect()
            }
        })
        .collect()
}

impl IClusterer for KMeans {
    fn fit(&mut self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>> {
        if self.k > points.len() {
            return Err(ClusteringError::NotEnoughPoints {
                stage: "kmeans".to_string(),
                required: self.k,
                actual: points.len(),
            }
            .into());
        }
        if let Some(first) = points.first() {
            check_dimensions(points, first.len())?;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut centroids = plus_plus_init(points, self.k, &mut rng);
        let mut assignments = vec![0usize; points.len()];
        let mut converged = false;
        let mut iterations = 0;

        for iter in 0..self.max_iterations {
            iterations = iter + 1;
            for (a, p) in assignments.iter_mut().zip(points) {
                *a = closest(p, &centroids);
            }
            let next = recompute(points, &assignments, &centroids);
            let movement = centroids
                .iter()
                .zip(&next)
                .map(|(old, new)| euclidean_distance_squared(old, new).sqrt())
                .fold(0.0f64, f64::max);
            centroids = next;
            if movement < self.tolerance {
                converged = true;
                break;
            }
        }
        // Final assignment against the settled centroids.
        for (a, p) in assignments.iter_mut().zip(points) {
            *a = closest(p, &centroids);
        }

        if converged {
            debug!(k = self.k, points = points.len(), iterations, "kmeans converged");
        } else {
            warn!(k = self.k, iterations, "kmeans did not converge");
        }
        self.centroids = Some(centroids);
        Ok(assignments.into_iter().map(Label::cluster).collect())
    }

    fn predict(&self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>> {
        let centroids = self.centroids.as_ref().ok_or_else(|| ClusteringError::NotFitted {
            stage: "kmeans".to_string(),
        })?;
        if let Some(first) = centroids.first() {
            check_dimensions(points, first.len())?;
        }
        Ok(points
            .iter()
            .map(|p| Label::cluster(closest(p, centroids)))
            .collect())
    }

    fn name(&self) -> &str {
        "kmeans"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_blobs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.2, 0.1],
            vec![0.1, 0.2],
            vec![10.0, 10.0],
            vec![10.2, 10.1],
            vec![-10.0, 10.0],
            vec![-10.1, 10.2],
        ]
    }

    fn partition(labels: &[Label]) -> Vec<Vec<usize>> {
        let max = labels.iter().filter_map(|l| l.index()).max().unwrap_or(0);
        let mut groups = vec![Vec::new(); max + 1];
        for (i, l) in labels.iter().enumerate() {
            groups[l.index().unwrap()].push(i);
        }
        groups.sort();
        groups
    }

    #[test]
    fn separates_well_spaced_blobs() {
        let mut km = KMeans::new(3, 0, 100, 1e-6).unwrap();
        let labels = km.fit(&three_blobs()).unwrap();
        assert_eq!(
            partition(&labels),
            vec![vec![0, 1, 2], vec![3, 4], vec![5, 6]]
        );
    }

    #[test]
    fn same_seed_same_labels() {
        let mut a = KMeans::new(2, 7, 100, 1e-6).unwrap();
        let mut b = KMeans::new(2, 7, 100, 1e-6).unwrap();
        assert_eq!(a.fit(&three_blobs()).unwrap(), b.fit(&three_blobs()).unwrap());
        assert_eq!(a.centroids(), b.centroids());
    }

    #[test]
    fn predict_matches_training_for_training_points() {
        let mut km = KMeans::new(3, 1, 100, 1e-6).unwrap();
        let points = three_blobs();
        let labels = km.fit(&points).unwrap();
        assert_eq!(km.predict(&points).unwrap(), labels);
    }

    #[test]
    fn k_zero_or_too_large_fails() {
        assert!(KMeans::new(0, 0, 10, 1e-4).is_err());
        let mut km = KMeans::new(8, 0, 10, 1e-4).unwrap();
        assert!(km.fit(&three_blobs()).is_err());
    }

    #[test]
    fn duplicate_points_still_yield_k_centroids() {
        let points = vec![vec![1.0, 1.0]; 4];
        let mut km = KMeans::new(2, 0, 10, 1e-4).unwrap();
        let labels = km.fit(&points).unwrap();
        assert_eq!(labels.len(), 4);
        assert_eq!(km.centroids().map(<[_]>::len), Some(2));
    }

    #[test]
    fn predict_before_fit_fails() {
        let km = KMeans::new(1, 0, 10, 1e-4).unwrap();
        assert!(km.predict(&[vec![0.0]]).is_err());
    }
}
