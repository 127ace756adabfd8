use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{LAT_MAX, LAT_MIN, LON_MAX, LON_MIN};

/// Check a raw latitude/longitude pair against WGS84 bounds (inclusive).
///
/// # Examples
/// ```
/// use coord_processor::models::is_valid_lat_lon;
///
/// assert!(is_valid_lat_lon(90.0, 180.0));
/// assert!(!is_valid_lat_lon(90.0000001, 0.0));
/// ```
pub fn is_valid_lat_lon(lat: f64, lon: f64) -> bool {
    (LAT_MIN..=LAT_MAX).contains(&lat) && (LON_MIN..=LON_MAX).contains(&lon)
}

/// Parse a decimal-degree coordinate value from text
pub fn parse_decimal_degree(value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        ProcessingError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", value))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_lat_lon(self.latitude, self.longitude)
    }

    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Two points bundled for pairwise distance computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub a: GeoPoint,
    pub b: GeoPoint,
}

impl CoordinatePair {
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self { a, b }
    }
}
