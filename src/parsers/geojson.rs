use serde_json::Value;

use crate::models::GeoPoint;
use crate::utils::constants::MAX_GEOJSON_DEPTH;

/// Extract point coordinates from GeoJSON text.
///
/// Walks the decoded tree dispatching on each node's `type` tag: `Point`
/// geometries yield their leading `[lon, lat]` values, `Feature` and
/// `FeatureCollection` nodes are descended, and unrecognized mappings are
/// searched exhaustively so points nested in foreign structures are still
/// found. A bare array whose first two elements are numeric is accepted
/// as a coordinate pair. Undecodable text yields an empty list; points
/// outside WGS84 bounds are dropped.
pub fn extract_geojson_points(text: &str) -> Vec<GeoPoint> {
    let mut points = Vec::new();
    if let Ok(document) = serde_json::from_str::<Value>(text) {
        extract(&document, 0, &mut points);
    }
    points
}

fn extract(node: &Value, depth: usize, points: &mut Vec<GeoPoint>) {
    // Depth guard: real GeoJSON nests a handful of levels; anything
    // deeper is adversarial and gets ignored rather than recursed.
    if depth >= MAX_GEOJSON_DEPTH {
        return;
    }

    match node {
        Value::Object(map) => match map.get("type").and_then(Value::as_str) {
            Some("Point") => {
                if let Some(coordinates) = map.get("coordinates").and_then(Value::as_array) {
                    push_lon_lat(coordinates, points);
                }
            }
            Some("Feature") => {
                if let Some(geometry) = map.get("geometry") {
                    extract(geometry, depth + 1, points);
                }
            }
            Some("FeatureCollection") => {
                if let Some(features) = map.get("features").and_then(Value::as_array) {
                    for feature in features {
                        extract(feature, depth + 1, points);
                    }
                }
            }
            _ => {
                for value in map.values() {
                    extract(value, depth + 1, points);
                }
            }
        },
        Value::Array(values) => {
            // Bare [lon, lat, ...] arrays count as a coordinate pair
            if !push_lon_lat(values, points) {
                for value in values {
                    extract(value, depth + 1, points);
                }
            }
        }
        _ => {}
    }
}

/// Accept the leading `[lon, lat]` of `values` when both are numeric
fn push_lon_lat(values: &[Value], points: &mut Vec<GeoPoint>) -> bool {
    if values.len() < 2 {
        return false;
    }
    match (values[0].as_f64(), values[1].as_f64()) {
        (Some(lon), Some(lat)) => {
            let point = GeoPoint::new(lat, lon);
            if point.is_valid() {
                points.push(point);
            }
            true
        }
        _ => false,
    }
}
