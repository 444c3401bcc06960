//! Seams for the pluggable collaborators: embedder, clusterer, projection.

pub mod clusterer;
pub mod embedding;
pub mod projection;

pub use clusterer::IClusterer;
pub use embedding::IEmbeddingProvider;
pub use projection::IProjection;
