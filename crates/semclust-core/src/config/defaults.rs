// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 300;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 100_000;

// --- Clustering ---
/// DBSCAN neighborhood radius.
pub const DEFAULT_DBSCAN_EPS: f64 = 0.3;
/// DBSCAN minimum neighborhood size, the point itself included.
pub const DEFAULT_DBSCAN_MIN_SAMPLES: usize = 2;
pub const DEFAULT_HDBSCAN_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_PROJECTION_DIMS: usize = 2;
pub const DEFAULT_PROJECTION_ITERATIONS: usize = 200;
pub const DEFAULT_RANDOM_SEED: u64 = 42;
pub const DEFAULT_KMEANS_MAX_ITERATIONS: usize = 300;
pub const DEFAULT_KMEANS_TOLERANCE: f64 = 1e-4;

// --- Merge ---
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 0.5;
pub const DEFAULT_VARIABLE_THRESHOLD: f64 = 0.5;

// --- Pairs ---
pub const DEFAULT_SIMILAR_VERTEX_THRESHOLD: f64 = 0.85;
pub const DEFAULT_SHUFFLE_SEED: u64 = 0;

// --- Files / logging ---
pub const DEFAULT_CONFIG_FILENAME: &str = "semclust.toml";
pub const DEFAULT_LOG_FILTER: &str = "semclust=info";
