//! Vertex pair and sweep curve files.

use std::path::Path;

use semclust_core::errors::IoError;
use semclust_core::models::{SweepPoint, VertexPair};
use tracing::info;

use crate::atomic::write_atomic;

/// `first,second,similarity` rows.
pub fn write_pairs(path: &Path, pairs: &[VertexPair]) -> Result<(), IoError> {
    write_atomic(path, |w| {
        w.write_record(["first", "second", "similarity"])?;
        for p in pairs {
            w.write_record([p.first.as_str(), p.second.as_str(), p.similarity.to_string().as_str()])?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), pairs = pairs.len(), "pairs written");
    Ok(())
}

/// `threshold,accuracy,normalized_assignments` rows.
pub fn write_sweep(path: &Path, points: &[SweepPoint]) -> Result<(), IoError> {
    write_atomic(path, |w| {
        w.write_record(["threshold", "accuracy", "normalized_assignments"])?;
        for p in points {
            w.write_record([
                format!("{:.2}", p.threshold),
                p.accuracy.to_string(),
                p.normalized_assignments.to_string(),
            ])?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), points = points.len(), "sweep written");
    Ok(())
}
