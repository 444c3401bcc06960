//! Variable lists, assignment outputs and ground-truth files.

use std::path::Path;

use semclust_core::errors::IoError;
use semclust_core::models::{ClusterAssignment, VariableAssignment};
use tracing::info;

use crate::atomic::write_atomic;
use crate::table::CsvTable;

/// The `variable` column. Other columns are ignored.
pub fn read_variables(path: &Path) -> Result<Vec<String>, IoError> {
    let variables = CsvTable::open(path)?.strings("variable")?;
    info!(path = %path.display(), variables = variables.len(), "variables loaded");
    Ok(variables)
}

/// A ground-truth label column such as `KMeansLabels` or `DBSCANLabels`.
pub fn read_truth_column(path: &Path, column: &str) -> Result<Vec<i32>, IoError> {
    CsvTable::open(path)?.parse::<i32>(column)
}

/// The `cluster` column of an assignment file.
pub fn read_cluster_column(path: &Path) -> Result<Vec<i32>, IoError> {
    CsvTable::open(path)?.parse::<i32>("cluster")
}

/// `variable,cluster` rows.
pub fn write_variable_assignments(
    path: &Path,
    assignments: &[VariableAssignment],
) -> Result<(), IoError> {
    write_atomic(path, |w| {
        w.write_record(["variable", "cluster"])?;
        for a in assignments {
            w.write_record([a.variable.as_str(), a.cluster.to_string().as_str()])?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), rows = assignments.len(), "assignments written");
    Ok(())
}

/// Node → cluster rows under the same `variable,cluster` header.
pub fn write_node_clusters(path: &Path, assignment: &ClusterAssignment) -> Result<(), IoError> {
    write_atomic(path, |w| {
        w.write_record(["variable", "cluster"])?;
        for (node, label) in assignment.nodes().iter().zip(assignment.labels()) {
            w.write_record([node.as_str(), label.to_string().as_str()])?;
        }
        Ok(())
    })?;
    info!(path = %path.display(), rows = assignment.len(), "node clusters written");
    Ok(())
}
