use std::collections::HashMap;

use super::{Label, Node};
use crate::errors::ClusteringError;

/// Node → label mapping, kept as two parallel vectors so duplicate node
/// strings (a phrase seen as subject and as object) keep one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    nodes: Vec<Node>,
    labels: Vec<Label>,
}

impl ClusterAssignment {
    pub fn new(nodes: Vec<Node>, labels: Vec<Label>) -> Result<Self, ClusteringError> {
        if nodes.len() != labels.len() {
            return Err(ClusteringError::LengthMismatch {
                what: "cluster assignment".to_string(),
                left: labels.len(),
                right: nodes.len(),
            });
        }
        Ok(Self { nodes, labels })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Highest cluster index present, `None` if everything is noise.
    pub fn max_cluster_index(&self) -> Option<usize> {
        self.labels.iter().filter_map(|l| l.index()).max()
    }

    /// Number of rows carrying each label (noise included).
    pub fn label_counts(&self) -> HashMap<Label, usize> {
        let mut counts = HashMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Rows whose label is not noise.
    pub fn without_noise(&self) -> Self {
        let (nodes, labels) = self
            .nodes
            .iter()
            .zip(&self.labels)
            .filter(|(_, l)| !l.is_noise())
            .map(|(n, l)| (n.clone(), *l))
            .unzip();
        Self { nodes, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[i32]) -> Vec<Label> {
        raw.iter().map(|&l| Label::from(l)).collect()
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = ClusterAssignment::new(vec!["a".into()], labels(&[0, 1])).unwrap_err();
        assert!(matches!(err, ClusteringError::LengthMismatch { .. }));
    }

    #[test]
    fn counts_and_max() {
        let a = ClusterAssignment::new(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            labels(&[0, 2, 0, -1]),
        )
        .unwrap();
        assert_eq!(a.max_cluster_index(), Some(2));
        assert_eq!(a.label_counts()[&Label(0)], 2);
        assert_eq!(a.label_counts()[&Label::NOISE], 1);
        assert_eq!(a.without_noise().len(), 3);
    }

    #[test]
    fn all_noise_has_no_max() {
        let a = ClusterAssignment::new(vec!["a".into()], labels(&[-1])).unwrap();
        assert_eq!(a.max_cluster_index(), None);
    }
}
