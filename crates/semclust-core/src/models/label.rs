use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NOISE_LABEL;

/// A cluster label. Non-negative values index clusters, `NOISE` marks
/// points that belong to no cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub i32);

impl Label {
    pub const NOISE: Label = Label(NOISE_LABEL);

    /// Label for the cluster at `index`.
    pub fn cluster(index: usize) -> Self {
        Label(index as i32)
    }

    pub fn is_noise(self) -> bool {
        self.0 < 0
    }

    /// Cluster index, `None` for noise.
    pub fn index(self) -> Option<usize> {
        if self.is_noise() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        // Every negative raw label collapses to the noise sentinel.
        if value < 0 {
            Label::NOISE
        } else {
            Label(value)
        }
    }
}
