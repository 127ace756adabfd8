pub mod csv;
pub mod geojson;
pub mod kml;
pub mod line;

pub use csv::extract_csv_points;
pub use geojson::extract_geojson_points;
pub use kml::extract_kml_points;
pub use line::{parse_coordinate_pairs, parse_distance_pairs};
