use crate::errors::SemclustResult;
use crate::models::Label;

/// A clustering strategy: fit on a training set, then label new points.
pub trait IClusterer: Send + Sync {
    /// Fit on `points` and return one label per point.
    fn fit(&mut self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>>;

    /// Label new points against the fitted model.
    fn predict(&self, points: &[Vec<f32>]) -> SemclustResult<Vec<Label>>;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}
