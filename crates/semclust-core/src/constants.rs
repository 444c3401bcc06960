/// semclust version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw label value for points no density region claims.
pub const NOISE_LABEL: i32 = -1;

/// Starting point for "best average similarity so far". Any attainable
/// similarity, including -1.0, replaces it on the first comparison.
pub const NO_BEST_SIMILARITY: f64 = f64::NEG_INFINITY;

/// Out-of-sample similarity when no node outside the cluster exists.
pub const NO_OUTSIDE_GROUP_SIMILARITY: f64 = 1.0;

/// Verb used for edges attaching a variable to its cluster representative.
pub const IMPLEMENTS_VERB: &str = "implements";

/// Threshold sweep range: start, exclusive end, step.
pub const SWEEP_START: f64 = 0.01;
pub const SWEEP_END: f64 = 0.95;
pub const SWEEP_STEP: f64 = 0.02;
