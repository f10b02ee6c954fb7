//! Domain error types.
//!
//! These errors represent validation failures on catalog data. They are
//! distinct from planning errors, which describe a request rather than
//! the data it runs over.

use crate::geo::InvalidCoordinate;

use super::NodeId;

/// A node record that violates the node invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidNode {
    /// Identifier is empty or whitespace
    #[error("node id must not be empty")]
    EmptyId,

    /// Coordinates out of range or not finite
    #[error("node {id}: {source}")]
    Position {
        id: NodeId,
        #[source]
        source: InvalidCoordinate,
    },

    /// Reward rate negative or not finite
    #[error("node {id}: reward rate must be finite and non-negative, got {value}")]
    RewardRate { id: NodeId, value: f64 },

    /// Reliability outside [0, 1]
    #[error("node {id}: reliability score must be within [0, 1], got {value}")]
    Reliability { id: NodeId, value: f64 },
}
