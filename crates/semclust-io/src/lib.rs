//! # semclust-io
//!
//! CSV readers and writers for every file the pipeline consumes or produces.
//! Readers check required columns up front and fail with the file path and
//! the missing column name. Writers go through a temporary file in the
//! target directory and rename on success.

pub mod atomic;
pub mod edges;
pub mod labels;
pub mod pairs;
pub mod table;
pub mod variables;

pub use atomic::write_atomic;
pub use edges::{read_edges, read_vertex_columns, write_edges};
pub use labels::{read_label_table, write_label_table};
pub use pairs::{write_pairs, write_sweep};
pub use table::CsvTable;
pub use variables::{
    read_cluster_column, read_truth_column, read_variables, write_node_clusters,
    write_variable_assignments,
};
