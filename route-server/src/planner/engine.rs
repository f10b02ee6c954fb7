//! Planning entry point: filter, rank, assemble.

use tracing::debug;

use crate::domain::Node;

use super::assemble::{RouteResult, assemble};
use super::config::PlannerConfig;
use super::error::PlanError;
use super::filter::filter_candidates;
use super::query::RouteQuery;
use super::rank::rank;

/// Route planner over a caller-supplied node catalog.
///
/// Holds no state between calls: the catalog is passed in fresh each time,
/// and identical inputs always produce identical routes.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan a route through `catalog` for `query`.
    pub fn plan(&self, catalog: &[Node], query: &RouteQuery) -> Result<RouteResult, PlanError> {
        query.validate()?;

        let candidates = filter_candidates(catalog, query);
        debug!(
            catalog = catalog.len(),
            candidates = candidates.len(),
            criterion = %query.criterion,
            "filtered candidates"
        );

        let ranked = rank(&candidates, query, &self.config.travel)?;
        let route = assemble(&ranked, query, &self.config.travel)?;

        debug!(
            nodes = route.node_count(),
            distance_km = route.total_distance_km,
            minutes = route.estimated_time_minutes,
            over_budget = route.over_time_budget,
            "assembled route"
        );

        Ok(route)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::NodeStatus;
    use crate::geo::GeoPoint;
    use crate::planner::query::Criterion;
    use crate::planner::test_support::record;
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = NodeStatus> {
        prop_oneof![
            3 => Just(NodeStatus::Active),
            1 => Just(NodeStatus::Inactive),
            1 => Just(NodeStatus::Pending),
        ]
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<Node>> {
        prop::collection::vec(
            (0.0f64..10.0, 37.60f64..37.95, -122.60f64..-122.20, status_strategy()),
            0..25,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (reward, lat, lng, status))| {
                    Node::try_from(record(&format!("n{i}"), reward, lat, lng, status)).unwrap()
                })
                .collect()
        })
    }

    fn query_strategy() -> impl Strategy<Value = RouteQuery> {
        (
            1usize..8,
            0.5f64..20.0,
            prop_oneof![
                Just(Criterion::Earnings),
                Just(Criterion::Distance),
                Just(Criterion::Time)
            ],
            any::<bool>(),
        )
            .prop_map(|(max_nodes, radius, criterion, refine)| {
                RouteQuery::new(criterion)
                    .with_origin(GeoPoint::new(37.7749, -122.4194).unwrap())
                    .with_max_nodes(max_nodes)
                    .with_max_distance_km(radius)
                    .with_refine_tour(refine)
            })
    }

    proptest! {
        #[test]
        fn routes_respect_query(catalog in catalog_strategy(), query in query_strategy()) {
            let config = PlannerConfig::default();
            let planner = Planner::new(&config);
            let origin = query.origin.unwrap();

            match planner.plan(&catalog, &query) {
                Ok(route) => {
                    prop_assert!(!route.nodes.is_empty());
                    prop_assert!(route.node_count() <= query.max_nodes);
                    prop_assert_eq!(route.waypoints.len(), route.node_count() + 1);
                    for node in &route.nodes {
                        prop_assert!(node.is_active());
                        prop_assert!(origin.distance_km(node.position()) <= query.max_distance_km);
                    }
                    let sum: f64 = route.nodes.iter().map(|n| n.reward_rate_usd()).sum();
                    prop_assert!((route.estimated_earnings_usd - sum).abs() < 1e-9);
                }
                Err(PlanError::NoCandidates { .. }) => {
                    let any_eligible = catalog.iter().any(|n| {
                        n.is_active() && origin.distance_km(n.position()) <= query.max_distance_km
                    });
                    prop_assert!(!any_eligible);
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }
}
