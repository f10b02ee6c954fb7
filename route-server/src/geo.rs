//! Geographic points and great-circle distance.
//!
//! Distances use the haversine formula on a spherical Earth. This is the
//! only distance model in the crate: filtering, ranking and route metrics
//! all go through [`distance_km`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing a point from invalid coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinate {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A WGS-84 coordinate with latitude in [-90, 90] and longitude in [-180, 180].
///
/// Any `GeoPoint` is valid by construction, so distance computations never
/// see NaN or out-of-range input.
///
/// # Examples
///
/// ```
/// use route_server::geo::GeoPoint;
///
/// let sf = GeoPoint::new(37.7749, -122.4194).unwrap();
/// assert_eq!(sf.distance_km(sf), 0.0);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// Unvalidated wire form of a point.
#[derive(Serialize, Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Create a point, validating both coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        let invalid = |reason| InvalidCoordinate { lat, lng, reason };

        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }

        Ok(Self { lat, lng })
    }

    /// Create a point from a `[lng, lat]` pair (GeoJSON ordering).
    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Result<Self, InvalidCoordinate> {
        Self::new(lat, lng)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns the point as a `[lng, lat]` pair (GeoJSON ordering).
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        distance_km(self, other)
    }
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

impl From<GeoPoint> for RawPoint {
    fn from(p: GeoPoint) -> Self {
        RawPoint {
            lat: p.lat,
            lng: p.lng,
        }
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lng)
    }
}

/// Haversine great-circle distance between two points in kilometers.
///
/// Returns exactly 0 for identical points. The haversine term is clamped to
/// [0, 1] so rounding near antipodal points cannot produce NaN.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }

    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Total length of a path through `points`, in order.
///
/// Empty and single-point paths have zero length.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| distance_km(w[0], w[1])).sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng).unwrap())
    }

    proptest! {
        #[test]
        fn self_distance_is_zero(a in point()) {
            prop_assert_eq!(distance_km(a, a), 0.0);
        }

        #[test]
        fn symmetric(a in point(), b in point()) {
            let ab = distance_km(a, b);
            let ba = distance_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
        }

        #[test]
        fn finite_and_bounded(a in point(), b in point()) {
            let d = distance_km(a, b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
