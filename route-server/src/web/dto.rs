//! Data transfer objects for web requests and responses.
//!
//! Coordinates on the wire are `[lng, lat]` pairs.

use serde::{Deserialize, Serialize};

use crate::domain::Node;
use crate::geo::GeoPoint;
use crate::planner::{
    Criterion, PlanError, PlannerConfig, RouteOption, RoutePreset, RouteQuery, RouteResult,
};

/// Request to optimize a route.
///
/// Every field is optional. Missing limits fall back to the planner
/// configuration defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteRequest {
    /// Starting position as `[lng, lat]`
    pub user_location: Option<[f64; 2]>,

    /// Maximum number of nodes to visit
    pub max_nodes: Option<i64>,

    /// Search radius in kilometers
    pub max_distance: Option<f64>,

    /// Travel time budget in minutes
    pub max_time: Option<f64>,

    /// "earnings", "distance" or "time"
    pub optimization: Option<String>,

    /// Reorder the selected nodes to shorten the path
    pub refine_tour: Option<bool>,
}

impl OptimizeRouteRequest {
    /// Convert into a planner query, filling defaults from `config`.
    pub fn into_query(self, config: &PlannerConfig) -> Result<RouteQuery, PlanError> {
        let criterion = match self.optimization.as_deref() {
            Some(s) => s.parse::<Criterion>()?,
            None => Criterion::default(),
        };

        let max_nodes = match self.max_nodes {
            Some(n) => usize::try_from(n)
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| PlanError::invalid(format!("maxNodes must be positive, got {n}")))?,
            None => config.default_max_nodes,
        };

        let origin = self
            .user_location
            .map(GeoPoint::from_lng_lat)
            .transpose()
            .map_err(|e| PlanError::invalid(format!("userLocation: {e}")))?;

        Ok(RouteQuery {
            max_nodes,
            max_distance_km: self.max_distance.unwrap_or(config.default_max_distance_km),
            max_time_minutes: self.max_time,
            origin,
            criterion,
            refine_tour: self.refine_tour.unwrap_or(false),
        })
    }
}

/// A planned route as returned to clients.
#[derive(Debug, Serialize)]
pub struct RouteView {
    pub nodes: Vec<Node>,
    pub total_distance_km: f64,
    pub estimated_earnings_usd: f64,
    pub estimated_time_minutes: u32,
    /// `[lng, lat]` pairs, origin first when one was given
    pub waypoints: Vec<[f64; 2]>,
    pub over_time_budget: bool,
}

impl From<RouteResult> for RouteView {
    fn from(route: RouteResult) -> Self {
        Self {
            waypoints: route.waypoints.iter().map(|p| p.to_lng_lat()).collect(),
            nodes: route.nodes,
            total_distance_km: route.total_distance_km,
            estimated_earnings_usd: route.estimated_earnings_usd,
            estimated_time_minutes: route.estimated_time_minutes,
            over_time_budget: route.over_time_budget,
        }
    }
}

/// Response from route optimization.
#[derive(Debug, Serialize)]
pub struct OptimizeRouteResponse {
    pub success: bool,
    pub route: RouteView,
}

impl OptimizeRouteResponse {
    pub fn new(route: RouteResult) -> Self {
        Self {
            success: true,
            route: route.into(),
        }
    }
}

/// Query string for the route options endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteOptionsQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl RouteOptionsQuery {
    /// The origin, if both coordinates were supplied.
    pub fn origin(&self) -> Result<Option<GeoPoint>, PlanError> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng)
                .map(Some)
                .map_err(|e| PlanError::invalid(e.to_string())),
            (None, None) => Ok(None),
            _ => Err(PlanError::invalid("lat and lng must be given together")),
        }
    }
}

/// One preset in the route options response.
///
/// Exactly one of `route` and `error` is present.
#[derive(Debug, Serialize)]
pub struct RouteOptionView {
    pub preset: RoutePreset,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl From<RouteOption> for RouteOptionView {
    fn from(option: RouteOption) -> Self {
        let (route, error, kind) = match option.result {
            Ok(route) => (Some(route.into()), None, None),
            Err(e) => (None, Some(e.to_string()), Some(e.kind())),
        };

        Self {
            preset: option.preset,
            name: option.preset.name(),
            description: option.preset.description(),
            route,
            error,
            kind,
        }
    }
}

/// Response from the route options endpoint.
#[derive(Debug, Serialize)]
pub struct RouteOptionsResponse {
    pub success: bool,
    pub options: Vec<RouteOptionView>,
}

/// Query string for listing nodes.
#[derive(Debug, Deserialize)]
pub struct NodeListQuery {
    /// Network name, e.g. "helium"
    pub network: Option<String>,

    /// "active", "inactive" or "pending"
    pub status: Option<String>,
}

/// Response listing catalog nodes.
#[derive(Debug, Serialize)]
pub struct NodeListResponse {
    pub success: bool,
    pub count: usize,
    pub nodes: Vec<Node>,
}

/// Response for a single node.
#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub success: bool,
    pub node: Node,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    /// Stable machine-readable error kind
    pub kind: &'static str,
}
