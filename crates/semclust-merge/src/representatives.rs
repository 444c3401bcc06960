//! Representatives for every group, used when attaching variables.

use semclust_core::errors::MergeError;
use semclust_core::models::{ClusteredGroup, Node};

/// One slot per group index; empty groups have no representative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentativeTable {
    entries: Vec<Option<Node>>,
}

impl RepresentativeTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Representative of group `index`.
    pub fn get(&self, index: usize) -> Result<&Node, MergeError> {
        match self.entries.get(index) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(MergeError::UnknownCluster {
                index,
                reason: "group is empty".to_string(),
            }),
            None => Err(MergeError::UnknownCluster {
                index,
                reason: format!("only {} groups exist", self.entries.len()),
            }),
        }
    }
}

pub fn representatives_for_all(groups: &[ClusteredGroup]) -> RepresentativeTable {
    RepresentativeTable {
        entries: groups.iter().map(|g| g.representative().cloned()).collect(),
    }
}
