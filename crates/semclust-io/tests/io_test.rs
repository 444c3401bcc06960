//! CSV file contracts.

use semclust_core::errors::IoError;
use semclust_core::models::{ClusterAssignment, ClusterLabelRow, Label, SweepPoint, Triple, VariableAssignment, VertexPair};
use semclust_io::*;

fn dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn edges_round_trip_with_quoting() {
    let d = dir();
    let path = d.path().join("svo.csv");
    let edges = vec![
        Triple::new("infection rate", "depends on", "contact, per day"),
        Triple::new("A", "causes", "A"),
    ];
    write_edges(&path, &edges).unwrap();
    assert_eq!(read_edges(&path).unwrap(), edges);
}

#[test]
fn edges_without_verb_column_fail_with_column_name() {
    let d = dir();
    let path = d.path().join("svo.csv");
    std::fs::write(&path, "subject,object\na,b\n").unwrap();
    match read_edges(&path) {
        Err(IoError::MissingColumn { column, .. }) => assert_eq!(column, "verb"),
        other => panic!("expected missing column, got {other:?}"),
    }
    let (subjects, objects) = read_vertex_columns(&path).unwrap();
    assert_eq!(subjects, vec!["a"]);
    assert_eq!(objects, vec!["b"]);
}

#[test]
fn label_table_headers_and_values() {
    let d = dir();
    let path = d.path().join("clusteringLabels.csv");
    let rows = vec![ClusterLabelRow {
        node: "flu".to_string(),
        labels: Label(0),
        umap_labels: Label::NOISE,
        dbscan_sim: 0.875,
        umap_sim: 0.0,
        out_sample_dbscan: 0.05,
        out_sample_umap: 1.0,
    }];
    write_label_table(&path, &rows).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("node,labels,umapLabels,dbscanSim,UMAPsim,out_sampleDBSCAN,out_sampleUMAP\n"));
    assert_eq!(read_label_table(&path).unwrap(), rows);
}

#[test]
fn label_table_accepts_nan_ratios() {
    let d = dir();
    let path = d.path().join("labels.csv");
    std::fs::write(
        &path,
        "node,labels,umapLabels,dbscanSim,UMAPsim,out_sampleDBSCAN,out_sampleUMAP\nrock,1,1,nan,NaN,0.05,0.05\n",
    )
    .unwrap();
    let rows = read_label_table(&path).unwrap();
    assert!(rows[0].dbscan_sim.is_nan());
    assert!(rows[0].umap_sim.is_nan());
}

#[test]
fn label_table_missing_column() {
    let d = dir();
    let path = d.path().join("labels.csv");
    std::fs::write(&path, "node,labels\nflu,0\n").unwrap();
    let err = read_label_table(&path).unwrap_err();
    assert!(err.to_string().contains("`umapLabels`"));
}

#[test]
fn variables_and_truth() {
    let d = dir();
    let path = d.path().join("vars.csv");
    std::fs::write(&path, "variable,KMeansLabels,notes\nβ_rate,2,x\nR0,0,y\n").unwrap();
    assert_eq!(read_variables(&path).unwrap(), vec!["β_rate", "R0"]);
    assert_eq!(read_truth_column(&path, "KMeansLabels").unwrap(), vec![2, 0]);
    assert!(read_truth_column(&path, "DBSCANLabels").is_err());
}

#[test]
fn assignments_and_node_clusters() {
    let d = dir();
    let path = d.path().join("predicted.csv");
    let assignments = vec![VariableAssignment {
        variable: "Beta  rate".to_string(),
        cluster: 3,
        average_similarity: 0.7,
    }];
    write_variable_assignments(&path, &assignments).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "variable,cluster\nBeta  rate,3\n");
    assert_eq!(read_cluster_column(&path).unwrap(), vec![3]);

    let clusters = d.path().join("kmeans.csv");
    let training = ClusterAssignment::new(vec!["flu".into(), "rock".into()], vec![Label(1), Label(0)]).unwrap();
    write_node_clusters(&clusters, &training).unwrap();
    assert_eq!(std::fs::read_to_string(&clusters).unwrap(), "variable,cluster\nflu,1\nrock,0\n");
}

#[test]
fn pairs_and_sweep() {
    let d = dir();
    let pairs_path = d.path().join("pairs.csv");
    write_pairs(
        &pairs_path,
        &[VertexPair { first: "flu".into(), second: "cold".into(), similarity: 0.5 }],
    )
    .unwrap();
    assert_eq!(std::fs::read_to_string(&pairs_path).unwrap(), "first,second,similarity\nflu,cold,0.5\n");

    let sweep_path = d.path().join("sweep.csv");
    write_sweep(
        &sweep_path,
        &[SweepPoint { threshold: 0.01, accuracy: 1.0, normalized_assignments: 1.0 }],
    )
    .unwrap();
    assert_eq!(
        std::fs::read_to_string(&sweep_path).unwrap(),
        "threshold,accuracy,normalized_assignments\n0.01,1,1\n"
    );
}
