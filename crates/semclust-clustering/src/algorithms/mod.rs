//! Clustering strategies. All implement `IClusterer`.

pub mod dbscan;
pub mod hdbscan;
pub mod kmeans;

pub use self::dbscan::Dbscan;
pub use self::hdbscan::HdbscanClusterer;
pub use self::kmeans::KMeans;

use semclust_core::config::{ClusteringConfig, DensityAlgorithm};
use semclust_core::errors::ClusteringError;
use semclust_core::traits::IClusterer;

/// Build the configured density-based clusterer (unfitted).
pub fn build_density_clusterer(
    config: &ClusteringConfig,
) -> Result<Box<dyn IClusterer>, ClusteringError> {
    Ok(match config.density_algorithm {
        DensityAlgorithm::Dbscan => Box::new(Dbscan::new(config.dbscan_eps, config.dbscan_min_samples)?),
        DensityAlgorithm::Hdbscan => Box::new(HdbscanClusterer::new(
            config.hdbscan_min_cluster_size,
            config.dbscan_min_samples,
        )?),
    })
}

/// Index of the point in `candidates` nearest to `point`, with its squared
/// distance. First minimum wins ties.
pub(crate) fn nearest<'a, I>(point: &[f32], candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = (usize, &'a Vec<f32>)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, c) in candidates {
        let d = semclust_core::similarity::euclidean_distance_squared(point, c);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((idx, d));
        }
    }
    best
}

pub(crate) fn check_dimensions(points: &[Vec<f32>], expected: usize) -> Result<(), ClusteringError> {
    match points.iter().find(|p| p.len() != expected) {
        Some(p) => Err(ClusteringError::DimensionMismatch {
            expected,
            actual: p.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_configured_algorithm() {
        let mut config = ClusteringConfig::default();
        assert_eq!(build_density_clusterer(&config).unwrap().name(), "dbscan");
        config.density_algorithm = DensityAlgorithm::Hdbscan;
        assert_eq!(build_density_clusterer(&config).unwrap().name(), "hdbscan");
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let pts = vec![vec![1.0, 0.0], vec![-1.0, 0.0]];
        let (idx, d) = nearest(&[0.0, 0.0], pts.iter().enumerate()).unwrap();
        assert_eq!(idx, 0);
        assert!((d - 1.0).abs() < 1e-12);
    }
}
