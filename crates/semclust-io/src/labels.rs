//! Cluster label table files.

use std::path::Path;

use semclust_core::errors::IoError;
use semclust_core::models::{ClusterLabelRow, CLUSTER_LABEL_COLUMNS};
use tracing::info;

use crate::atomic::write_atomic;
use crate::table::CsvTable;

pub fn read_label_table(path: &Path) -> Result<Vec<ClusterLabelRow>, IoError> {
    let table = CsvTable::open(path)?;
    table.require(&CLUSTER_LABEL_COLUMNS)?;
    let rows = table.deserialize::<ClusterLabelRow>()?;
    info!(path = %path.display(), rows = rows.len(), "label table loaded");
    Ok(rows)
}

pub fn write_label_table(path: &Path, rows: &[ClusterLabelRow]) -> Result<(), IoError> {
    write_atomic(path, |w| {
        for row in rows {
            w.serialize(row)?;
        }
        if rows.is_empty() {
            w.write_record(CLUSTER_LABEL_COLUMNS)?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), rows = rows.len(), "label table written");
    Ok(())
}
