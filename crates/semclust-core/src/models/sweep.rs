use serde::{Deserialize, Serialize};

/// One threshold of the variable-attachment sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub threshold: f64,
    /// Correct assignments among those above the threshold (1.0 when none
    /// are above it).
    pub accuracy: f64,
    /// Correct above-threshold assignments as a fraction of all variables,
    /// divided by the same fraction at the first threshold.
    pub normalized_assignments: f64,
}
