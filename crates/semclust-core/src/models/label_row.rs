use serde::{Deserialize, Serialize};

use super::{Label, Node};

/// One row of the cluster label table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterLabelRow {
    pub node: Node,
    /// Density label on the raw embeddings.
    pub labels: Label,
    /// Density label on the projected embeddings.
    #[serde(rename = "umapLabels")]
    pub umap_labels: Label,
    #[serde(rename = "dbscanSim")]
    pub dbscan_sim: f64,
    #[serde(rename = "UMAPsim")]
    pub umap_sim: f64,
    #[serde(rename = "out_sampleDBSCAN")]
    pub out_sample_dbscan: f64,
    #[serde(rename = "out_sampleUMAP")]
    pub out_sample_umap: f64,
}

/// Column names in file order.
pub const CLUSTER_LABEL_COLUMNS: [&str; 7] = [
    "node",
    "labels",
    "umapLabels",
    "dbscanSim",
    "UMAPsim",
    "out_sampleDBSCAN",
    "out_sampleUMAP",
];
