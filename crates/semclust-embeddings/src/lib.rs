//! # semclust-embeddings
//!
//! Phrase → vector providers behind one engine that is created once per run
//! and passed by reference to every stage.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── provider (Box<dyn IEmbeddingProvider>)
//! │   ├── WordVectorProvider (averaged word vectors, default)
//! │   └── TfIdfFallback (always available)
//! ├── L1MemoryCache (moka, keyed by blake3 of the phrase)
//! └── normalize (variable-name cleanup before embedding)
//! ```

pub mod cache;
pub mod engine;
pub mod normalize;
pub mod providers;

pub use cache::L1MemoryCache;
pub use engine::EmbeddingEngine;
pub use normalize::{greek_letter_name, normalize_variable, normalize_variables};
pub use providers::{TfIdfFallback, WordVectorProvider};
