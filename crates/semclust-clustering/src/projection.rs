//! PCA projection by power iteration.
//!
//! Fit once on the reference points; every later `transform` uses the same
//! mean and components, so reference and new points land in one space.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use semclust_core::errors::{ClusteringError, SemclustResult};
use semclust_core::traits::IProjection;
use tracing::debug;

#[derive(Debug, Clone)]
struct Fitted {
    mean: Vec<f64>,
    /// Unit-length principal axes, highest variance first.
    components: Vec<Vec<f64>>,
}

/// Deterministic PCA projection.
#[derive(Debug, Clone)]
pub struct PcaProjection {
    dims: usize,
    iterations: usize,
    seed: u64,
    fitted: Option<Fitted>,
}

impl PcaProjection {
    pub fn new(dims: usize, iterations: usize, seed: u64) -> Self {
        Self {
            dims,
            iterations,
            seed,
            fitted: None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}

impl IProjection for PcaProjection {
    fn fit(&mut self, points: &[Vec<f32>]) -> SemclustResult<()> {
        if self.dims == 0 {
            return Err(ClusteringError::invalid("projection_dims", "must be greater than 0").into());
        }
        let Some(first) = points.first() else {
            return Err(ClusteringError::NotEnoughPoints {
                stage: "projection".to_string(),
                required: 1,
                actual: 0,
            }
            .into());
        };
        let width = first.len();
        check_width(points, width)?;

        let n = points.len() as f64;
        let mut mean = vec![0.0f64; width];
        for p in points {
            for (m, &x) in mean.iter_mut().zip(p) {
                *m += x as f64;
            }
        }
        for m in &mut mean {
            *m /= n;
        }
        let centered: Vec<Vec<f64>> = points
            .iter()
            .map(|p| p.iter().zip(&mean).map(|(&x, m)| x as f64 - m).collect())
            .collect();

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut components: Vec<Vec<f64>> = Vec::with_capacity(self.dims);
        for _ in 0..self.dims {
            let mut v: Vec<f64> = (0..width).map(|_| rng.gen_range(-1.0..1.0)).collect();
            orthogonalize(&mut v, &components);
            normalize(&mut v);

            for _ in 0..self.iterations {
                let mut next = covariance_times(&centered, &v);
                orthogonalize(&mut next, &components);
                if !normalize(&mut next) {
                    // Remaining variance is zero: this axis carries nothing.
                    v = vec![0.0; width];
                    break;
                }
                v = next;
            }
            fix_sign(&mut v);
            components.push(v);
        }

        debug!(points = points.len(), width, dims = self.dims, "projection fitted");
        self.fitted = Some(Fitted { mean, components });
        Ok(())
    }

    fn transform(&self, points: &[Vec<f32>]) -> SemclustResult<Vec<Vec<f32>>> {
        let fitted = self.fitted.as_ref().ok_or_else(|| ClusteringError::NotFitted {
            stage: "projection".to_string(),
        })?;
        check_width(points, fitted.mean.len())?;

        Ok(points
            .iter()
            .map(|p| {
                fitted
                    .components
                    .iter()
                    .map(|axis| {
                        p.iter()
                            .zip(&fitted.mean)
                            .zip(axis)
                            .map(|((&x, m), a)| (x as f64 - m) * a)
                            .sum::<f64>() as f32
                    })
                    .collect()
            })
            .collect())
    }

    fn output_dimensions(&self) -> usize {
        self.dims
    }
}

fn check_width(points: &[Vec<f32>], width: usize) -> Result<(), ClusteringError> {
    match points.iter().find(|p| p.len() != width) {
        Some(p) => Err(ClusteringError::DimensionMismatch {
            expected: width,
            actual: p.len(),
        }),
        None => Ok(()),
    }
}

/// `Xᵀ (X v) / n` without materializing the covariance matrix.
fn covariance_times(centered: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0f64; v.len()];
    for row in centered {
        let proj: f64 = row.iter().zip(v).map(|(x, y)| x * y).sum();
        for (o, x) in out.iter_mut().zip(row) {
            *o += proj * x;
        }
    }
    let n = centered.len() as f64;
    for o in &mut out {
        *o /= n;
    }
    out
}

fn orthogonalize(v: &mut [f64], basis: &[Vec<f64>]) {
    for b in basis {
        let d: f64 = v.iter().zip(b).map(|(x, y)| x * y).sum();
        for (x, y) in v.iter_mut().zip(b) {
            *x -= d * y;
        }
    }
}

/// Scale to unit length. Returns false for a (near) zero vector.
fn normalize(v: &mut [f64]) -> bool {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm < 1e-12 {
        return false;
    }
    for x in v.iter_mut() {
        *x /= norm;
    }
    true
}

/// Largest-magnitude coordinate positive.
fn fix_sign(v: &mut [f64]) {
    let pivot = v
        .iter()
        .copied()
        .fold(0.0f64, |acc, x| if x.abs() > acc.abs() { x } else { acc });
    if pivot < 0.0 {
        for x in v.iter_mut() {
            *x = -*x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_points() -> Vec<Vec<f32>> {
        // Spread along (1, 1, 0), small noise along z.
        (0..10)
            .map(|i| {
                let t = i as f32;
                vec![t, t, if i % 2 == 0 { 0.1 } else { -0.1 }]
            })
            .collect()
    }

    #[test]
    fn first_axis_follows_the_spread() {
        let mut pca = PcaProjection::new(1, 200, 42);
        let out = pca.fit_transform(&line_points()).unwrap();
        assert_eq!(out.len(), 10);
        assert_eq!(out[0].len(), 1);
        // Monotone along the line.
        for w in out.windows(2) {
            assert!(w[1][0] > w[0][0]);
        }
        // Distance between ends ≈ |(9, 9, 0)|.
        let span = out[9][0] - out[0][0];
        assert!((span - (162.0f32).sqrt()).abs() < 0.05, "span = {span}");
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let mut a = PcaProjection::new(2, 100, 7);
        let mut b = PcaProjection::new(2, 100, 7);
        assert_eq!(
            a.fit_transform(&line_points()).unwrap(),
            b.fit_transform(&line_points()).unwrap()
        );
    }

    #[test]
    fn transform_reuses_fitted_space() {
        let mut pca = PcaProjection::new(2, 100, 1);
        let reference = line_points();
        let projected = pca.fit_transform(&reference).unwrap();
        let again = pca.transform(&reference[..3]).unwrap();
        assert_eq!(&projected[..3], &again[..]);
    }

    #[test]
    fn transform_before_fit_fails() {
        let pca = PcaProjection::new(2, 10, 0);
        assert!(pca.transform(&[vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn rank_deficient_axes_project_to_zero() {
        let points = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
        let mut pca = PcaProjection::new(2, 50, 3);
        let out = pca.fit_transform(&points).unwrap();
        for p in out {
            assert!(p[1].abs() < 1e-3);
        }
    }

    #[test]
    fn width_mismatch_rejected() {
        let mut pca = PcaProjection::new(1, 10, 0);
        assert!(pca.fit(&[vec![1.0, 2.0], vec![1.0]]).is_err());
    }

    #[test]
    fn empty_input_rejected() {
        let mut pca = PcaProjection::new(1, 10, 0);
        assert!(pca.fit(&[]).is_err());
    }
}
