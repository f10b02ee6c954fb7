//! Route assembly and metrics.

use serde::Serialize;

use crate::domain::Node;
use crate::geo::{GeoPoint, path_length_km};

use super::config::TravelModel;
use super::error::PlanError;
use super::query::RouteQuery;
use super::tour::two_opt;

/// A planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Selected nodes in visiting order.
    pub nodes: Vec<Node>,

    /// Great-circle length of the path through the waypoints (km).
    pub total_distance_km: f64,

    /// Sum of the selected nodes' hourly reward rates (USD).
    ///
    /// This is a ranking proxy, not a forecast: it ignores dwell time at
    /// each node and the time spent travelling between them.
    pub estimated_earnings_usd: f64,

    /// Travel time for `total_distance_km` under the travel model, in whole
    /// minutes.
    pub estimated_time_minutes: u32,

    /// Origin (if given) followed by each node's position in visiting order.
    pub waypoints: Vec<GeoPoint>,

    /// True when the query had a time budget and this route exceeds it.
    /// The route is never truncated to fit.
    pub over_time_budget: bool,
}

impl RouteResult {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Build a route from ranked candidates.
///
/// Takes the first `max_nodes` candidates in ranked order as the visiting
/// order (reordered by 2-opt if `refine_tour` is set), then computes path
/// distance, travel time and summed earnings.
///
/// Fails with [`PlanError::NoCandidates`] when there is nothing to visit and
/// with [`PlanError::InvalidQuery`] for a malformed query.
pub fn assemble(
    ordered: &[&Node],
    query: &RouteQuery,
    travel: &TravelModel,
) -> Result<RouteResult, PlanError> {
    query.validate()?;

    let take = query.max_nodes.min(ordered.len());
    if take == 0 {
        return Err(PlanError::NoCandidates {
            max_distance_km: query.max_distance_km,
            has_origin: query.origin.is_some(),
        });
    }

    let mut selected = ordered[..take].to_vec();
    if query.refine_tour {
        selected = two_opt(selected, query.origin);
    }

    let waypoints: Vec<GeoPoint> = query
        .origin
        .into_iter()
        .chain(selected.iter().map(|node| node.position()))
        .collect();

    let total_distance_km = path_length_km(&waypoints);
    let estimated_time_minutes = travel.whole_minutes_for(total_distance_km);
    let estimated_earnings_usd: f64 = selected.iter().map(|node| node.reward_rate_usd()).sum();

    let over_time_budget = query
        .max_time_minutes
        .is_some_and(|budget| f64::from(estimated_time_minutes) > budget);

    Ok(RouteResult {
        nodes: selected.into_iter().cloned().collect(),
        total_distance_km,
        estimated_earnings_usd,
        estimated_time_minutes,
        waypoints,
        over_time_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::distance_km;
    use crate::planner::query::Criterion;
    use crate::planner::test_support::{node, node_at};

    fn origin() -> GeoPoint {
        GeoPoint::new(37.7749, -122.4194).unwrap()
    }

    #[test]
    fn empty_candidates_is_no_candidates() {
        let result = assemble(&[], &RouteQuery::default(), &TravelModel::WALKING);

        assert_eq!(
            result,
            Err(PlanError::NoCandidates {
                max_distance_km: 10.0,
                has_origin: false,
            })
        );
    }

    #[test]
    fn takes_first_max_nodes() {
        let catalog = vec![
            node("a", 5.0),
            node("b", 4.1),
            node("c", 3.2),
            node("d", 1.8),
            node("e", 1.0),
        ];
        let ordered: Vec<&Node> = catalog.iter().collect();
        let query = RouteQuery::default().with_max_nodes(2);

        let route = assemble(&ordered, &query, &TravelModel::WALKING).unwrap();

        assert_eq!(route.node_count(), 2);
        assert_eq!(route.nodes[0].id().as_str(), "a");
        assert_eq!(route.nodes[1].id().as_str(), "b");
        assert_eq!(route.estimated_earnings_usd, 5.0 + 4.1);
    }

    #[test]
    fn fewer_candidates_than_max_nodes() {
        let catalog = vec![node("a", 1.0), node("b", 2.0)];
        let ordered: Vec<&Node> = catalog.iter().collect();

        let route = assemble(&ordered, &RouteQuery::default(), &TravelModel::WALKING).unwrap();

        assert_eq!(route.node_count(), 2);
    }

    #[test]
    fn distance_includes_leg_from_origin() {
        let catalog = vec![
            node_at("a", 1.0, 37.7793, -122.4193),
            node_at("b", 1.0, 37.7599, -122.4148),
        ];
        let ordered: Vec<&Node> = catalog.iter().collect();
        let query = RouteQuery::new(Criterion::Distance).with_origin(origin());

        let route = assemble(&ordered, &query, &TravelModel::WALKING).unwrap();

        let expected = distance_km(origin(), catalog[0].position())
            + distance_km(catalog[0].position(), catalog[1].position());
        assert!((route.total_distance_km - expected).abs() < 1e-9);

        assert_eq!(route.waypoints.len(), 3);
        assert_eq!(route.waypoints[0], origin());
        assert_eq!(route.waypoints[1], catalog[0].position());
        assert_eq!(route.waypoints[2], catalog[1].position());
    }

    #[test]
    fn no_origin_starts_at_first_node() {
        let catalog = vec![
            node_at("a", 1.0, 37.7793, -122.4193),
            node_at("b", 1.0, 37.7599, -122.4148),
        ];
        let ordered: Vec<&Node> = catalog.iter().collect();

        let route = assemble(&ordered, &RouteQuery::default(), &TravelModel::WALKING).unwrap();

        let expected = distance_km(catalog[0].position(), catalog[1].position());
        assert!((route.total_distance_km - expected).abs() < 1e-9);
        assert_eq!(route.waypoints.len(), 2);
    }

    #[test]
    fn single_node_without_origin_is_zero_length() {
        let catalog = vec![node("only", 3.0)];
        let ordered: Vec<&Node> = catalog.iter().collect();

        let route = assemble(&ordered, &RouteQuery::default(), &TravelModel::WALKING).unwrap();

        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.estimated_time_minutes, 0);
        assert_eq!(route.estimated_earnings_usd, 3.0);
        assert_eq!(route.waypoints, vec![catalog[0].position()]);
    }

    #[test]
    fn travel_time_uses_model_and_rounds() {
        // Two nodes ~13.43 km apart
        let catalog = vec![
            node_at("sf", 1.0, 37.7749, -122.4194),
            node_at("oakland", 1.0, 37.8044, -122.2712),
        ];
        let ordered: Vec<&Node> = catalog.iter().collect();

        let walking = assemble(&ordered, &RouteQuery::default(), &TravelModel::WALKING).unwrap();
        let expected = (walking.total_distance_km / 5.0 * 60.0).round() as u32;
        assert_eq!(walking.estimated_time_minutes, expected);
        assert_eq!(walking.estimated_time_minutes, 161);

        let driving = assemble(&ordered, &RouteQuery::default(), &TravelModel::DRIVING).unwrap();
        assert_eq!(driving.estimated_time_minutes, 20);
    }

    #[test]
    fn over_budget_is_marked_not_truncated() {
        let catalog = vec![
            node_at("sf", 1.0, 37.7749, -122.4194),
            node_at("oakland", 1.0, 37.8044, -122.2712),
        ];
        let ordered: Vec<&Node> = catalog.iter().collect();

        let query = RouteQuery::default().with_max_time_minutes(30.0);
        let route = assemble(&ordered, &query, &TravelModel::WALKING).unwrap();
        assert!(route.over_time_budget);
        assert_eq!(route.node_count(), 2);

        let query = RouteQuery::default().with_max_time_minutes(600.0);
        let route = assemble(&ordered, &query, &TravelModel::WALKING).unwrap();
        assert!(!route.over_time_budget);

        let route = assemble(&ordered, &RouteQuery::default(), &TravelModel::WALKING).unwrap();
        assert!(!route.over_time_budget);
    }

    #[test]
    fn invalid_query_is_rejected_before_selection() {
        let catalog = vec![node("a", 1.0)];
        let ordered: Vec<&Node> = catalog.iter().collect();
        let query = RouteQuery::default().with_max_nodes(0);

        let result = assemble(&ordered, &query, &TravelModel::WALKING);

        assert!(matches!(result, Err(PlanError::InvalidQuery(_))));
    }

    #[test]
    fn refine_tour_never_lengthens_route() {
        let catalog = vec![
            node_at("c", 3.0, 37.7749, -122.3900),
            node_at("a", 2.0, 37.7749, -122.4100),
            node_at("d", 1.0, 37.7749, -122.3800),
            node_at("b", 1.0, 37.7749, -122.4000),
        ];
        let ordered: Vec<&Node> = catalog.iter().collect();
        let greedy_query = RouteQuery::default().with_origin(origin());
        let refined_query = greedy_query.clone().with_refine_tour(true);

        let greedy = assemble(&ordered, &greedy_query, &TravelModel::WALKING).unwrap();
        let refined = assemble(&ordered, &refined_query, &TravelModel::WALKING).unwrap();

        assert!(refined.total_distance_km < greedy.total_distance_km);
        assert_eq!(refined.estimated_earnings_usd, greedy.estimated_earnings_usd);
        assert_eq!(refined.node_count(), greedy.node_count());
    }
}
