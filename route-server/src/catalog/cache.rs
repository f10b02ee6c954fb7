//! TTL cache over a catalog source.
//!
//! The whole catalog is cached as a single entry. Planning reads the cached
//! snapshot; once the TTL lapses the next read reloads from the source.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::info;

use crate::domain::Node;

use super::error::CatalogError;
use super::source::CatalogSource;

/// Default catalog TTL: 60 seconds.
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Configuration for the file-backed catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file.
    pub path: PathBuf,
    /// How long a loaded catalog is served before reloading.
    pub ttl: Duration,
}

impl CatalogConfig {
    /// Create a new config with the given path and default TTL.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("data/nodes.json")
    }
}

/// Node catalog with caching.
pub struct CachedCatalog {
    source: CatalogSource,
    snapshot: MokaCache<(), Arc<Vec<Node>>>,
}

impl CachedCatalog {
    /// Create a cached catalog over any source.
    pub fn new(source: CatalogSource, ttl: Duration) -> Self {
        let snapshot = MokaCache::builder()
            .time_to_live(ttl)
            .max_capacity(1)
            .build();

        Self { source, snapshot }
    }

    /// Create a catalog backed by the configured file.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(CatalogSource::File(config.path.clone()), config.ttl)
    }

    /// Create a catalog over a fixed list of nodes.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self::new(CatalogSource::Static(Arc::new(nodes)), DEFAULT_TTL)
    }

    /// The current catalog snapshot, loading it if absent or expired.
    pub async fn nodes(&self) -> Result<Arc<Vec<Node>>, CatalogError> {
        if let Some(cached) = self.snapshot.get(&()).await {
            return Ok(cached);
        }

        let nodes = self.source.load().await?;
        info!(nodes = nodes.len(), "catalog loaded");

        self.snapshot.insert((), Arc::clone(&nodes)).await;
        Ok(nodes)
    }

    /// Look up a single node by id.
    pub async fn find(&self, id: &str) -> Result<Option<Node>, CatalogError> {
        let nodes = self.nodes().await?;
        Ok(nodes.iter().find(|node| node.id().as_str() == id).cloned())
    }

    /// Drop the cached snapshot so the next read reloads.
    pub fn invalidate(&self) {
        self.snapshot.invalidate_all();
    }

    /// Number of cached snapshots (0 or 1).
    pub fn entry_count(&self) -> u64 {
        self.snapshot.entry_count()
    }
}
