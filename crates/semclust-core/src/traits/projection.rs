use crate::errors::SemclustResult;

/// A lower-dimensional projection fit once on a reference set and reused for
/// every later transform, so reference and new points share one space.
pub trait IProjection: Send + Sync {
    fn fit(&mut self, points: &[Vec<f32>]) -> SemclustResult<()>;

    fn transform(&self, points: &[Vec<f32>]) -> SemclustResult<Vec<Vec<f32>>>;

    /// Fit then transform the same points.
    fn fit_transform(&mut self, points: &[Vec<f32>]) -> SemclustResult<Vec<Vec<f32>>> {
        self.fit(points)?;
        self.transform(points)
    }

    fn output_dimensions(&self) -> usize;
}
