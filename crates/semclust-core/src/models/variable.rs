use serde::{Deserialize, Serialize};

/// A variable placed in one reference cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAssignment {
    /// Normalized variable name.
    pub variable: String,
    pub cluster: usize,
    /// Mean similarity of the variable to the members of `cluster`.
    #[serde(skip)]
    pub average_similarity: f64,
}

impl VariableAssignment {
    /// Whether the variable is wired into the graph at `threshold`.
    /// Strictly above; NaN never passes.
    pub fn passes(&self, threshold: f64) -> bool {
        self.average_similarity > threshold
    }
}
