//! Candidate ranking by optimization criterion.
//!
//! Every ordering is a stable sort, so candidates that tie keep their
//! catalog order.

use std::cmp::Ordering;

use crate::domain::Node;
use crate::geo::GeoPoint;

use super::config::TravelModel;
use super::error::PlanError;
use super::query::{Criterion, RouteQuery};

/// Rank candidates by the query's criterion.
///
/// - `Earnings`: highest reward rate first.
/// - `Distance`: nearest to the origin first.
/// - `Time`: shortest travel time from the origin first, under `travel`.
///
/// Origin-dependent criteria fail with [`PlanError::InvalidQuery`] when the
/// query has no origin, instead of falling back to an arbitrary order.
///
/// Returns a new vector; `candidates` is left untouched.
pub fn rank<'a>(
    candidates: &[&'a Node],
    query: &RouteQuery,
    travel: &TravelModel,
) -> Result<Vec<&'a Node>, PlanError> {
    let ranked = match query.criterion {
        Criterion::Earnings => {
            let mut ranked = candidates.to_vec();
            ranked.sort_by(|a, b| compare_f64(b.reward_rate_usd(), a.reward_rate_usd()));
            ranked
        }
        Criterion::Distance => {
            let origin = query.required_origin()?;
            ascending_by(candidates, |node| distance_from(origin, node))
        }
        Criterion::Time => {
            let origin = query.required_origin()?;
            ascending_by(candidates, |node| {
                travel.minutes_for(distance_from(origin, node))
            })
        }
    };

    Ok(ranked)
}

fn distance_from(origin: GeoPoint, node: &Node) -> f64 {
    origin.distance_km(node.position())
}

/// Sort ascending by a computed key, evaluating the key once per node.
fn ascending_by<'a>(candidates: &[&'a Node], key: impl Fn(&Node) -> f64) -> Vec<&'a Node> {
    let mut keyed: Vec<(f64, &'a Node)> = candidates.iter().map(|n| (key(n), *n)).collect();
    keyed.sort_by(|a, b| compare_f64(a.0, b.0));
    keyed.into_iter().map(|(_, node)| node).collect()
}

/// Compare finite floats. Node invariants and haversine guarantee finiteness;
/// `-0.0` and `0.0` compare equal so ties stay stable.
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
