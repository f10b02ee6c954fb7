//! Catalog error types.

use std::path::PathBuf;

use crate::domain::InvalidNode;

/// Errors that can occur when loading the node catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog is not a JSON array of node records
    #[error("catalog JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed node validation
    #[error("catalog entry {index}: {source}")]
    InvalidNode {
        index: usize,
        #[source]
        source: InvalidNode,
    },

    /// Two records share an id
    #[error("duplicate node id in catalog: {0}")]
    DuplicateId(String),
}
