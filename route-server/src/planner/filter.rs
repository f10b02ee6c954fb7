//! Candidate filtering.

use crate::domain::Node;

use super::query::RouteQuery;

/// Narrow a catalog to the nodes eligible for a query.
///
/// Keeps nodes that are active and, when the query has an origin, lie within
/// `max_distance_km` of it (inclusive). Catalog order is preserved.
///
/// An empty result is not an error here; the assembler reports it as
/// [`PlanError::NoCandidates`](super::PlanError::NoCandidates).
pub fn filter_candidates<'a>(catalog: &'a [Node], query: &RouteQuery) -> Vec<&'a Node> {
    catalog
        .iter()
        .filter(|node| node.is_active())
        .filter(|node| match query.origin {
            Some(origin) => origin.distance_km(node.position()) <= query.max_distance_km,
            None => true,
        })
        .collect()
}
