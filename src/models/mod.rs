pub mod dms;
pub mod invalid;
pub mod point;

pub use dms::{Axis, DmsCoordinate};
pub use invalid::InvalidEntry;
pub use point::{is_valid_lat_lon, parse_decimal_degree, CoordinatePair, GeoPoint};
