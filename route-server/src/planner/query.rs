//! Route query and optimization criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

use super::error::PlanError;

/// Default number of nodes in a route.
pub const DEFAULT_MAX_NODES: usize = 5;

/// Default search radius around the origin (km).
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

/// The dimension candidates are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Highest reward rate first.
    #[default]
    Earnings,
    /// Nearest to the origin first.
    Distance,
    /// Shortest travel time from the origin first.
    Time,
}

impl Criterion {
    /// Whether ranking by this criterion needs an origin.
    pub fn requires_origin(&self) -> bool {
        matches!(self, Criterion::Distance | Criterion::Time)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Earnings => "earnings",
            Criterion::Distance => "distance",
            Criterion::Time => "time",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "earnings" => Ok(Criterion::Earnings),
            "distance" => Ok(Criterion::Distance),
            "time" => Ok(Criterion::Time),
            _ => Err(PlanError::invalid(format!("unknown criterion: {s}"))),
        }
    }
}

/// An immutable planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    /// Maximum number of nodes to visit. Must be positive.
    pub max_nodes: usize,

    /// Radius around the origin in kilometers. Must be positive.
    /// Ignored when there is no origin.
    pub max_distance_km: f64,

    /// Optional travel time budget in minutes.
    /// Exceeding it marks the result but never truncates it.
    pub max_time_minutes: Option<f64>,

    /// Where the route starts, if known.
    pub origin: Option<GeoPoint>,

    /// How candidates are ordered.
    pub criterion: Criterion,

    /// Reorder the selected nodes with 2-opt to shorten the path.
    pub refine_tour: bool,
}

impl RouteQuery {
    /// Create a query with default limits for the given criterion.
    pub fn new(criterion: Criterion) -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            max_time_minutes: None,
            origin: None,
            criterion,
            refine_tour: false,
        }
    }

    pub fn with_origin(mut self, origin: GeoPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    pub fn with_max_time_minutes(mut self, minutes: f64) -> Self {
        self.max_time_minutes = Some(minutes);
        self
    }

    pub fn with_refine_tour(mut self, refine: bool) -> Self {
        self.refine_tour = refine;
        self
    }

    /// Validate the query.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.max_nodes == 0 {
            return Err(PlanError::invalid("max_nodes must be positive"));
        }

        if !self.max_distance_km.is_finite() || self.max_distance_km <= 0.0 {
            return Err(PlanError::invalid(format!(
                "max_distance_km must be a positive number, got {}",
                self.max_distance_km
            )));
        }

        if let Some(minutes) = self.max_time_minutes
            && (!minutes.is_finite() || minutes <= 0.0)
        {
            return Err(PlanError::invalid(format!(
                "max_time_minutes must be a positive number, got {minutes}"
            )));
        }

        if self.criterion.requires_origin() {
            self.required_origin()?;
        }

        Ok(())
    }

    /// The origin, or an error naming the criterion that needs it.
    pub(crate) fn required_origin(&self) -> Result<GeoPoint, PlanError> {
        self.origin.ok_or_else(|| {
            PlanError::invalid(format!(
                "criterion '{}' requires an origin",
                self.criterion
            ))
        })
    }
}

impl Default for RouteQuery {
    fn default() -> Self {
        Self::new(Criterion::default())
    }
}
