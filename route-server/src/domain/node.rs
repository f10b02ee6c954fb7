//! Infrastructure node types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

use super::error::InvalidNode;

/// A non-empty node identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Parse a node identifier. Surrounding whitespace is not trimmed.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidNode> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(InvalidNode::EmptyId);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeId {
    type Error = InvalidNode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when parsing an unknown network or status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what}: {value}")]
pub struct UnknownVariant {
    what: &'static str,
    value: String,
}

/// The network a node participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Helium,
    Xnet,
    Geodnet,
    Hivemapper,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 4] = [
        NetworkKind::Helium,
        NetworkKind::Xnet,
        NetworkKind::Geodnet,
        NetworkKind::Hivemapper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKind::Helium => "helium",
            NetworkKind::Xnet => "xnet",
            NetworkKind::Geodnet => "geodnet",
            NetworkKind::Hivemapper => "hivemapper",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                what: "network",
                value: s.to_string(),
            })
    }
}

/// Operational status of a node, as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Active,
    Inactive,
    Pending,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Active => "active",
            NodeStatus::Inactive => "inactive",
            NodeStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [NodeStatus::Active, NodeStatus::Inactive, NodeStatus::Pending]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                what: "status",
                value: s.to_string(),
            })
    }
}

/// Unvalidated node record as supplied by a catalog.
///
/// Field names follow the catalog's JSON format. Convert with
/// `Node::try_from` to enforce the node invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub network_type: NetworkKind,
    pub lat: f64,
    pub lng: f64,
    pub status: NodeStatus,
    pub last_seen: DateTime<Utc>,
    pub reward_rate_usd: f64,
    pub reliability_score: f64,
    #[serde(default)]
    pub total_verifications: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A physical infrastructure node.
///
/// Reward rate and reliability are always finite and non-negative, and
/// reliability never exceeds 1. These hold for every `Node` because the only
/// way to build one is through [`NodeRecord`] validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeRecord", into = "NodeRecord")]
pub struct Node {
    id: NodeId,
    network: NetworkKind,
    position: GeoPoint,
    status: NodeStatus,
    last_seen: DateTime<Utc>,
    reward_rate_usd: f64,
    reliability_score: f64,
    total_verifications: u32,
    name: Option<String>,
}

impl Node {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn network(&self) -> NetworkKind {
        self.network
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == NodeStatus::Active
    }

    /// Expected reward in USD per hour.
    pub fn reward_rate_usd(&self) -> f64 {
        self.reward_rate_usd
    }

    /// Reliability in [0, 1].
    pub fn reliability_score(&self) -> f64 {
        self.reliability_score
    }

    pub fn total_verifications(&self) -> u32 {
        self.total_verifications
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name if present, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(self.id.as_str())
    }
}

impl TryFrom<NodeRecord> for Node {
    type Error = InvalidNode;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        let id = NodeId::parse(record.id)?;

        let position =
            GeoPoint::new(record.lat, record.lng).map_err(|source| InvalidNode::Position {
                id: id.clone(),
                source,
            })?;

        if !record.reward_rate_usd.is_finite() || record.reward_rate_usd < 0.0 {
            return Err(InvalidNode::RewardRate {
                id,
                value: record.reward_rate_usd,
            });
        }

        if !(0.0..=1.0).contains(&record.reliability_score) {
            return Err(InvalidNode::Reliability {
                id,
                value: record.reliability_score,
            });
        }

        Ok(Node {
            id,
            network: record.network_type,
            position,
            status: record.status,
            last_seen: record.last_seen,
            reward_rate_usd: record.reward_rate_usd,
            reliability_score: record.reliability_score,
            total_verifications: record.total_verifications,
            name: record.name,
        })
    }
}

impl From<Node> for NodeRecord {
    fn from(node: Node) -> Self {
        NodeRecord {
            id: node.id.into(),
            network_type: node.network,
            lat: node.position.lat(),
            lng: node.position.lng(),
            status: node.status,
            last_seen: node.last_seen,
            reward_rate_usd: node.reward_rate_usd,
            reliability_score: node.reliability_score,
            total_verifications: node.total_verifications,
            name: node.name,
        }
    }
}
