//! Edge substitution.

use semclust_core::models::Triple;
use tracing::debug;

use crate::plan::AssignmentMap;

/// Copy of `edges` with nodes replaced by their representatives.
///
/// Subject first: the object is only rewritten when the subject has no
/// mapping. The input is left untouched.
pub fn apply_assignment(edges: &[Triple], map: &AssignmentMap) -> Vec<Triple> {
    let mut rewritten = 0usize;
    let out: Vec<Triple> = edges
        .iter()
        .map(|edge| {
            let mut edge = edge.clone();
            if let Some(rep) = map.get(&edge.subject) {
                edge.subject = rep.clone();
                rewritten += 1;
            } else if let Some(rep) = map.get(&edge.object) {
                edge.object = rep.clone();
                rewritten += 1;
            }
            edge
        })
        .collect();
    debug!(edges = edges.len(), rewritten, "edges substituted");
    out
}
