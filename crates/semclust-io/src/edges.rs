//! Edge list (`subject,verb,object`) files.

use std::path::Path;

use semclust_core::errors::IoError;
use semclust_core::models::{Node, Triple};
use tracing::info;

use crate::atomic::write_atomic;
use crate::table::CsvTable;

pub fn read_edges(path: &Path) -> Result<Vec<Triple>, IoError> {
    let table = CsvTable::open(path)?;
    table.require(&["subject", "verb", "object"])?;
    let subjects = table.strings("subject")?;
    let verbs = table.strings("verb")?;
    let objects = table.strings("object")?;
    let edges: Vec<Triple> = subjects
        .into_iter()
        .zip(verbs)
        .zip(objects)
        .map(|((s, v), o)| Triple::new(s, v, o))
        .collect();
    info!(path = %path.display(), edges = edges.len(), "edges loaded");
    Ok(edges)
}

/// Subject and object columns only; `verb` may be absent.
pub fn read_vertex_columns(path: &Path) -> Result<(Vec<Node>, Vec<Node>), IoError> {
    let table = CsvTable::open(path)?;
    table.require(&["subject", "object"])?;
    Ok((table.strings("subject")?, table.strings("object")?))
}

pub fn write_edges(path: &Path, edges: &[Triple]) -> Result<(), IoError> {
    write_atomic(path, |w| {
        w.write_record(["subject", "verb", "object"])?;
        for e in edges {
            w.write_record([e.subject.as_str(), e.verb.as_str(), e.object.as_str()])?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), edges = edges.len(), "edges written");
    Ok(())
}
