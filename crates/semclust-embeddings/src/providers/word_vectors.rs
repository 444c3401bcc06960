//! Averaged word-vector provider.
//!
//! Loads a whitespace-separated vector table (`word v1 v2 ... vd` per line,
//! GloVe or word2vec text format) and embeds a phrase as the mean of its
//! known token vectors.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use semclust_core::errors::{EmbeddingError, SemclustResult};
use semclust_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Words and standalone punctuation marks.
static TOKEN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").ok());

/// Word-vector embedding provider.
pub struct WordVectorProvider {
    vectors: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl WordVectorProvider {
    /// Load a vector table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EmbeddingError::ModelLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Parse a vector table from any buffered reader. `origin` names the
    /// source in error messages.
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self, EmbeddingError> {
        let mut vectors = HashMap::new();
        let mut dimensions = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| EmbeddingError::ModelLoadFailed {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let rest: Vec<&str> = parts.collect();

            // word2vec text header: "<vocab_size> <dims>".
            if line_no == 1 && rest.len() == 1 && is_count(word) && is_count(rest[0]) {
                continue;
            }

            let values = rest
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| EmbeddingError::MalformedVectorTable {
                    path: origin.to_string(),
                    line: line_no,
                    reason: e.to_string(),
                })?;
            if values.is_empty() {
                return Err(EmbeddingError::MalformedVectorTable {
                    path: origin.to_string(),
                    line: line_no,
                    reason: format!("no vector components for `{word}`"),
                });
            }
            if dimensions == 0 {
                dimensions = values.len();
            } else if values.len() != dimensions {
                return Err(EmbeddingError::MalformedVectorTable {
                    path: origin.to_string(),
                    line: line_no,
                    reason: format!("expected {dimensions} components, found {}", values.len()),
                });
            }
            vectors.insert(word.to_string(), values);
        }

        if vectors.is_empty() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: origin.to_string(),
                reason: "vector table is empty".to_string(),
            });
        }

        debug!(path = origin, words = vectors.len(), dims = dimensions, "vector table parsed");
        Ok(Self {
            vectors,
            dimensions,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectors.len()
    }

    /// Exact match first, then lower-cased.
    fn lookup(&self, token: &str) -> Option<&Vec<f32>> {
        self.vectors
            .get(token)
            .or_else(|| self.vectors.get(&token.to_lowercase()))
    }
}

fn is_count(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn tokenize(text: &str) -> Vec<&str> {
    match TOKEN_RE.as_ref() {
        Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        None => text.split_whitespace().collect(),
    }
}

impl IEmbeddingProvider for WordVectorProvider {
    fn embed(&self, text: &str) -> SemclustResult<Vec<f32>> {
        let mut sum = vec![0.0f32; self.dimensions];
        let mut known = 0usize;
        for token in tokenize(text) {
            if let Some(v) = self.lookup(token) {
                for (s, x) in sum.iter_mut().zip(v) {
                    *s += x;
                }
                known += 1;
            }
        }
        if known > 0 {
            let n = known as f32;
            for s in &mut sum {
                *s /= n;
            }
        }
        Ok(sum)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "word-vectors"
    }

    fn is_available(&self) -> bool {
        !self.vectors.is_empty()
    }
}
