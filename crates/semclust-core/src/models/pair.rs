use serde::{Deserialize, Serialize};

use super::Node;

/// Two vertices and their similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexPair {
    pub first: Node,
    pub second: Node,
    pub similarity: f64,
}
