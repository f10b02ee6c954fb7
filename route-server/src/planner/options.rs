//! Preset route options.
//!
//! Three fixed parameter bundles over the same planner. Each preset is
//! planned independently, so one failing (say, nothing within 5 km) does
//! not stop the others.

use serde::Serialize;
use tracing::debug;

use crate::domain::Node;
use crate::geo::GeoPoint;

use super::assemble::RouteResult;
use super::engine::Planner;
use super::error::PlanError;
use super::query::{Criterion, RouteQuery};

/// A named planning preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutePreset {
    Quick,
    Balanced,
    MaxEarnings,
}

impl RoutePreset {
    /// All presets, in presentation order.
    pub const ALL: [RoutePreset; 3] = [
        RoutePreset::Quick,
        RoutePreset::Balanced,
        RoutePreset::MaxEarnings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoutePreset::Quick => "Quick Route",
            RoutePreset::Balanced => "Balanced Route",
            RoutePreset::MaxEarnings => "Max Earnings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RoutePreset::Quick => "3 nodes, fast completion",
            RoutePreset::Balanced => "5 nodes, good earnings/time ratio",
            RoutePreset::MaxEarnings => "8 nodes, maximum rewards",
        }
    }

    /// The query this preset plans with.
    pub fn query(&self, origin: Option<GeoPoint>) -> RouteQuery {
        let (max_nodes, max_distance_km, criterion) = match self {
            RoutePreset::Quick => (3, 5.0, Criterion::Distance),
            RoutePreset::Balanced => (5, 8.0, Criterion::Earnings),
            RoutePreset::MaxEarnings => (8, 15.0, Criterion::Earnings),
        };

        RouteQuery {
            origin,
            ..RouteQuery::new(criterion)
                .with_max_nodes(max_nodes)
                .with_max_distance_km(max_distance_km)
        }
    }
}

/// The outcome of planning one preset.
#[derive(Debug, Clone)]
pub struct RouteOption {
    pub preset: RoutePreset,
    pub result: Result<RouteResult, PlanError>,
}

/// Plan every preset against the same catalog and origin.
///
/// Always returns one entry per preset, in [`RoutePreset::ALL`] order.
pub fn generate_route_options(
    catalog: &[Node],
    origin: Option<GeoPoint>,
    planner: &Planner<'_>,
) -> Vec<RouteOption> {
    RoutePreset::ALL
        .into_iter()
        .map(|preset| {
            let result = planner.plan(catalog, &preset.query(origin));
            if let Err(e) = &result {
                debug!(preset = preset.name(), error = %e, "preset produced no route");
            }
            RouteOption { preset, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::config::PlannerConfig;
    use crate::planner::test_support::node_at;

    fn origin() -> GeoPoint {
        GeoPoint::new(37.7749, -122.4194).unwrap()
    }

    #[test]
    fn preset_parameters() {
        let q = RoutePreset::Quick.query(Some(origin()));
        assert_eq!(q.max_nodes, 3);
        assert_eq!(q.max_distance_km, 5.0);
        assert_eq!(q.criterion, Criterion::Distance);
        assert_eq!(q.origin, Some(origin()));

        let q = RoutePreset::Balanced.query(None);
        assert_eq!(q.max_nodes, 5);
        assert_eq!(q.max_distance_km, 8.0);
        assert_eq!(q.criterion, Criterion::Earnings);
        assert!(q.origin.is_none());

        let q = RoutePreset::MaxEarnings.query(None);
        assert_eq!(q.max_nodes, 8);
        assert_eq!(q.max_distance_km, 15.0);
        assert_eq!(q.criterion, Criterion::Earnings);
    }

    #[test]
    fn names_and_descriptions() {
        assert_eq!(RoutePreset::Quick.name(), "Quick Route");
        assert_eq!(RoutePreset::MaxEarnings.description(), "8 nodes, maximum rewards");
        assert_eq!(
            serde_json::to_string(&RoutePreset::MaxEarnings).unwrap(),
            r#""max_earnings""#
        );
    }

    #[test]
    fn one_option_per_preset_in_order() {
        let catalog = vec![node_at("a", 1.0, 37.7793, -122.4193)];
        let config = PlannerConfig::default();
        let planner = Planner::new(&config);

        let options = generate_route_options(&catalog, Some(origin()), &planner);

        let presets: Vec<RoutePreset> = options.iter().map(|o| o.preset).collect();
        assert_eq!(presets, RoutePreset::ALL);
        assert!(options.iter().all(|o| o.result.is_ok()));
    }

    #[test]
    fn presets_fail_independently() {
        // ~6.1 km and ~13.4 km from the origin: outside the quick preset's 5 km
        let catalog = vec![
            node_at("presidio", 2.0, 37.8024, -122.4800),
            node_at("oakland", 4.0, 37.8044, -122.2712),
        ];
        let config = PlannerConfig::default();
        let planner = Planner::new(&config);

        let options = generate_route_options(&catalog, Some(origin()), &planner);

        assert!(matches!(
            options[0].result,
            Err(PlanError::NoCandidates { .. })
        ));

        let balanced = options[1].result.as_ref().unwrap();
        assert_eq!(balanced.node_count(), 1);
        assert_eq!(balanced.nodes[0].id().as_str(), "presidio");

        let max = options[2].result.as_ref().unwrap();
        assert_eq!(max.node_count(), 2);
        assert_eq!(max.nodes[0].id().as_str(), "oakland");
    }

    #[test]
    fn no_origin_only_breaks_quick() {
        let catalog = vec![node_at("a", 1.0, 37.7793, -122.4193)];
        let config = PlannerConfig::default();
        let planner = Planner::new(&config);

        let options = generate_route_options(&catalog, None, &planner);

        assert!(matches!(options[0].result, Err(PlanError::InvalidQuery(_))));
        assert!(options[1].result.is_ok());
        assert!(options[2].result.is_ok());
    }
}
