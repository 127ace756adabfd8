pub mod cli;
pub mod distance;
pub mod error;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use error::{ProcessingError, Result};
pub use models::{Axis, CoordinatePair, DmsCoordinate, GeoPoint, InvalidEntry};
pub use pipeline::{compute_distances, convert_points_to_dms, parse_csv, parse_geojson, parse_kml};
