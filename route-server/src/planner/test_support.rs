//! Node fixtures shared by planner tests.

use chrono::{TimeZone, Utc};

use crate::domain::{NetworkKind, Node, NodeRecord, NodeStatus};

/// San Francisco city hall area, used as the default fixture position.
pub const SF: (f64, f64) = (37.7749, -122.4194);

pub fn record(id: &str, reward: f64, lat: f64, lng: f64, status: NodeStatus) -> NodeRecord {
    NodeRecord {
        id: id.to_string(),
        network_type: NetworkKind::Helium,
        lat,
        lng,
        status,
        last_seen: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
        reward_rate_usd: reward,
        reliability_score: 0.9,
        total_verifications: 3,
        name: None,
    }
}

/// Active node at the default position.
pub fn node(id: &str, reward: f64) -> Node {
    node_at(id, reward, SF.0, SF.1)
}

/// Active node at a given position.
pub fn node_at(id: &str, reward: f64, lat: f64, lng: f64) -> Node {
    Node::try_from(record(id, reward, lat, lng, NodeStatus::Active)).unwrap()
}

pub fn node_with_status(id: &str, reward: f64, status: NodeStatus) -> Node {
    Node::try_from(record(id, reward, SF.0, SF.1, status)).unwrap()
}
