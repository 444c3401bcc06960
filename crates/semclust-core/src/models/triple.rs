use serde::{Deserialize, Serialize};

use super::Node;

/// A (subject, verb, object) relation extracted from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub verb: String,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: impl Into<Node>, verb: impl Into<String>, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            verb: verb.into(),
            object: object.into(),
        }
    }
}
