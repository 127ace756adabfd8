/// WGS84 coordinate bounds
pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
pub const LON_MIN: f64 = -180.0;
pub const LON_MAX: f64 = 180.0;

/// Mean earth radius in kilometres (IUGG mean radius)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Kilometre to statute mile conversion factor
pub const KM_TO_MILES: f64 = 0.621371;

/// Seconds at or above this value would display as "60.00" at two
/// decimal places and must roll over into the next minute
pub const SECONDS_ROLLOVER: f64 = 59.9995;

/// CSV header synonyms for coordinate column detection
pub const LAT_HEADERS: [&str; 3] = ["lat", "latitude", "y"];
pub const LON_HEADERS: [&str; 4] = ["lon", "lng", "longitude", "x"];

/// Recursion limit for GeoJSON descent over untrusted documents
pub const MAX_GEOJSON_DEPTH: usize = 64;

/// Rendered when the distance pipeline accepts no pairs
pub const NO_VALID_PAIRS: &str = "No valid coordinate pairs provided.";
