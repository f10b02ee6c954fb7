//! Domain types for the node route planner.
//!
//! Nodes are owned by an external catalog and are read-only here. Every
//! type enforces its invariants at construction time, so the planner can
//! trust reward rates, reliability scores and positions without checking
//! them again.

mod error;
mod node;

pub use error::InvalidNode;
pub use node::{NetworkKind, Node, NodeId, NodeRecord, NodeStatus, UnknownVariant};
