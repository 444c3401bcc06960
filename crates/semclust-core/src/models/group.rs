use super::{Label, Node};
use crate::similarity::mean;

/// Nodes sharing one label plus their parallel similarity ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteredGroup {
    pub label: Label,
    pub nodes: Vec<Node>,
    pub ratios: Vec<f64>,
}

impl ClusteredGroup {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            nodes: Vec::new(),
            ratios: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node, ratio: f64) {
        self.nodes.push(node);
        self.ratios.push(ratio);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Mean similarity ratio. `None` when the group is empty or the mean is
    /// not a finite number.
    pub fn mean_ratio(&self) -> Option<f64> {
        mean(&self.ratios).filter(|m| m.is_finite())
    }

    /// Position of the node with the highest ratio. Strict `>` so the first
    /// maximum wins ties; NaN ratios are never chosen.
    pub fn representative_index(&self) -> Option<usize> {
        let mut best = f64::NEG_INFINITY;
        let mut best_idx = None;
        for (i, &ratio) in self.ratios.iter().enumerate() {
            if ratio > best {
                best = ratio;
                best_idx = Some(i);
            }
        }
        best_idx
    }

    pub fn representative(&self) -> Option<&Node> {
        self.representative_index().map(|i| &self.nodes[i])
    }
}
