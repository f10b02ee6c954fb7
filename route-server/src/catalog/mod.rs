//! Node catalog loading and caching.
//!
//! The planner takes the catalog as a plain slice. This module owns getting
//! that slice: reading and validating the catalog file, and keeping a
//! recent snapshot in memory.

mod cache;
mod error;
mod source;

pub use cache::{CachedCatalog, CatalogConfig};
pub use error::CatalogError;
pub use source::{CatalogSource, parse_catalog};
