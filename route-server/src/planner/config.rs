//! Planner configuration.

use std::fmt;
use std::str::FromStr;

/// Constant-speed travel model used to turn distance into time.
///
/// This stands in for a real routing engine: every leg is assumed to be
/// covered at the same speed regardless of terrain or roads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    speed_kmh: f64,
}

/// Error returned for a non-positive or non-finite travel speed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("travel speed must be a positive number of km/h, got {0}")]
pub struct InvalidSpeed(f64);

impl TravelModel {
    /// Average walking speed.
    pub const WALKING: TravelModel = TravelModel { speed_kmh: 5.0 };

    /// Average urban cycling speed.
    pub const CYCLING: TravelModel = TravelModel { speed_kmh: 15.0 };

    /// Average urban driving speed.
    pub const DRIVING: TravelModel = TravelModel { speed_kmh: 40.0 };

    /// Create a model with a custom speed.
    pub fn new(speed_kmh: f64) -> Result<Self, InvalidSpeed> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(InvalidSpeed(speed_kmh));
        }
        Ok(Self { speed_kmh })
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Unrounded travel time for a distance, in minutes.
    pub fn minutes_for(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh * 60.0
    }

    /// Travel time for a distance, rounded to the nearest whole minute.
    pub fn whole_minutes_for(&self, distance_km: f64) -> u32 {
        self.minutes_for(distance_km).round() as u32
    }
}

impl Default for TravelModel {
    fn default() -> Self {
        Self::WALKING
    }
}

/// Named travel modes, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Walking,
    Cycling,
    Driving,
}

impl TravelMode {
    pub fn model(&self) -> TravelModel {
        match self {
            TravelMode::Walking => TravelModel::WALKING,
            TravelMode::Cycling => TravelModel::CYCLING,
            TravelMode::Driving => TravelModel::DRIVING,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
            TravelMode::Driving => "driving",
        })
    }
}

/// Error returned when parsing an unknown travel mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown travel mode: {0} (expected walking, cycling or driving)")]
pub struct UnknownTravelMode(String);

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "walking" | "walk" => Ok(TravelMode::Walking),
            "cycling" | "bike" => Ok(TravelMode::Cycling),
            "driving" | "drive" => Ok(TravelMode::Driving),
            _ => Err(UnknownTravelMode(s.to_string())),
        }
    }
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Speed model for ranking by time and for route travel time.
    pub travel: TravelModel,

    /// Node limit used when a request does not give one.
    pub default_max_nodes: usize,

    /// Radius (km) used when a request does not give one.
    pub default_max_distance_km: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(travel: TravelModel, default_max_nodes: usize, default_max_distance_km: f64) -> Self {
        Self {
            travel,
            default_max_nodes,
            default_max_distance_km,
        }
    }

    /// Default configuration with a different travel model.
    pub fn with_travel(travel: TravelModel) -> Self {
        Self {
            travel,
            ..Self::default()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            travel: TravelModel::WALKING,
            default_max_nodes: super::query::DEFAULT_MAX_NODES,
            default_max_distance_km: super::query::DEFAULT_MAX_DISTANCE_KM,
        }
    }
}
