//! Top-level text-in/text-out pipeline operations.
//!
//! Every function here is infallible: malformed input degrades to an
//! empty table or an invalid-input footer, never an error or panic.

use tracing::debug;

use crate::distance::{haversine_km, km_to_miles};
use crate::models::{Axis, DmsCoordinate, GeoPoint};
use crate::parsers;
use crate::render;
use crate::utils::constants::NO_VALID_PAIRS;

/// Convert delimiter-separated DD pairs into a DD/DMS markdown table
pub fn convert_points_to_dms(text: &str) -> String {
    let (points, invalid) = parsers::parse_coordinate_pairs(text);
    debug!(
        accepted = points.len(),
        rejected = invalid.len(),
        "parsed coordinate pairs"
    );

    let mut table = render::dms_table();
    for point in &points {
        let lat_dms = DmsCoordinate::from_decimal_degrees(point.latitude);
        let lon_dms = DmsCoordinate::from_decimal_degrees(point.longitude);
        table.push_row(vec![
            format!("{:.6}", point.latitude),
            format!("{:.6}", point.longitude),
            lat_dms.format(Axis::Latitude),
            lon_dms.format(Axis::Longitude),
        ]);
    }

    let mut output = table.render();
    output.push_str(&render::invalid_footer(&invalid));
    output
}

/// Compute great-circle distances for `lat1,lon1,lat2,lon2` records
pub fn compute_distances(text: &str) -> String {
    let (pairs, invalid) = parsers::parse_distance_pairs(text);
    debug!(
        accepted = pairs.len(),
        rejected = invalid.len(),
        "parsed distance pairs"
    );

    if pairs.is_empty() {
        let mut output = String::from(NO_VALID_PAIRS);
        output.push_str(&render::invalid_footer(&invalid));
        return output;
    }

    let mut table = render::distance_table();
    for pair in &pairs {
        let km = haversine_km(&pair.a, &pair.b);
        table.push_row(vec![
            format!("{:.6}", pair.a.latitude),
            format!("{:.6}", pair.a.longitude),
            format!("{:.6}", pair.b.latitude),
            format!("{:.6}", pair.b.longitude),
            format!("{:.2}", km),
            format!("{:.2}", km_to_miles(km)),
        ]);
    }

    let mut output = table.render();
    output.push_str(&render::invalid_footer(&invalid));
    output
}

/// Extract points from GeoJSON text into a point table
pub fn parse_geojson(text: &str) -> String {
    let points = parsers::extract_geojson_points(text);
    debug!(points = points.len(), "extracted GeoJSON points");
    render_point_table(&points)
}

/// Extract points from KML text into a point table
pub fn parse_kml(text: &str) -> String {
    let points = parsers::extract_kml_points(text);
    debug!(points = points.len(), "extracted KML points");
    render_point_table(&points)
}

/// Extract points from CSV text into a point table
pub fn parse_csv(text: &str) -> String {
    let points = parsers::extract_csv_points(text);
    debug!(points = points.len(), "extracted CSV points");
    render_point_table(&points)
}

fn render_point_table(points: &[GeoPoint]) -> String {
    let mut table = render::point_table();
    for point in points {
        table.push_row(vec![
            point.latitude.to_string(),
            point.longitude.to_string(),
        ]);
    }
    table.render()
}
