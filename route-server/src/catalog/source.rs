//! Where the node catalog comes from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Node, NodeRecord};

use super::error::CatalogError;

/// A source of node records.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// JSON array of node records on disk, re-read on every load.
    File(PathBuf),

    /// Fixed in-memory catalog.
    Static(Arc<Vec<Node>>),
}

impl CatalogSource {
    /// Load and validate the full catalog.
    pub async fn load(&self) -> Result<Arc<Vec<Node>>, CatalogError> {
        match self {
            CatalogSource::File(path) => load_file(path).await.map(Arc::new),
            CatalogSource::Static(nodes) => Ok(Arc::clone(nodes)),
        }
    }
}

async fn load_file(path: &Path) -> Result<Vec<Node>, CatalogError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let nodes = parse_catalog(&contents)?;
    debug!(path = %path.display(), nodes = nodes.len(), "loaded catalog");
    Ok(nodes)
}

/// Parse a JSON array of node records into validated nodes.
///
/// Fails on the first invalid record or duplicate id. Record order is kept.
pub fn parse_catalog(json: &str) -> Result<Vec<Node>, CatalogError> {
    let records: Vec<NodeRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut nodes = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let node =
            Node::try_from(record).map_err(|source| CatalogError::InvalidNode { index, source })?;

        if !seen.insert(node.id().as_str().to_string()) {
            return Err(CatalogError::DuplicateId(node.id().to_string()));
        }
        nodes.push(node);
    }

    Ok(nodes)
}
