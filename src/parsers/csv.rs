use csv::ReaderBuilder;

use crate::models::GeoPoint;
use crate::utils::constants::{LAT_HEADERS, LON_HEADERS};

/// Extract point coordinates from CSV text with coordinate columns.
///
/// The header row is scanned case-insensitively for the first latitude
/// column (`lat`, `latitude`, `y`) and the first longitude column (`lon`,
/// `lng`, `longitude`, `x`). Either column missing yields an empty list.
/// Data rows convert independently; rows with missing or non-numeric
/// cells are skipped, as are rows outside WGS84 bounds.
pub fn extract_csv_points(text: &str) -> Vec<GeoPoint> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let Ok(headers) = reader.headers() else {
        return Vec::new();
    };
    let lat_column = find_column(headers, &LAT_HEADERS);
    let lon_column = find_column(headers, &LON_HEADERS);
    let (Some(lat_column), Some(lon_column)) = (lat_column, lon_column) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else {
            continue;
        };
        let lat = record.get(lat_column).and_then(parse_cell);
        let lon = record.get(lon_column).and_then(parse_cell);
        let (Some(lat), Some(lon)) = (lat, lon) else {
            continue;
        };
        let point = GeoPoint::new(lat, lon);
        if point.is_valid() {
            points.push(point);
        }
    }
    points
}

/// Index of the first header matching any alias, case-insensitively
fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        aliases
            .iter()
            .any(|alias| header.trim().eq_ignore_ascii_case(alias))
    })
}

fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lon_headers() {
        let points = extract_csv_points("lat,lon\n45.0,-93.0\n51.5,-0.13");
        assert_eq!(
            points,
            vec![GeoPoint::new(45.0, -93.0), GeoPoint::new(51.5, -0.13)]
        );
    }

    #[test]
    fn test_synonym_headers_are_equivalent() {
        let from_y_x = extract_csv_points("Y,X\n45.0,-93.0");
        let from_lat_lon = extract_csv_points("lat,lon\n45.0,-93.0");
        assert_eq!(from_y_x, from_lat_lon);
    }

    #[test]
    fn test_case_insensitive_headers() {
        let points = extract_csv_points("Latitude,LONGITUDE\n45.0,-93.0");
        assert_eq!(points, vec![GeoPoint::new(45.0, -93.0)]);
    }

    #[test]
    fn test_first_matching_column_wins() {
        let points = extract_csv_points("y,lat,lon\n1.0,45.0,-93.0");
        assert_eq!(points, vec![GeoPoint::new(1.0, -93.0)]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let points = extract_csv_points("name,lat,lon,elevation\nMinneapolis,45.0,-93.0,252");
        assert_eq!(points, vec![GeoPoint::new(45.0, -93.0)]);
    }

    #[test]
    fn test_missing_column_is_empty() {
        assert!(extract_csv_points("lat,elevation\n45.0,252").is_empty());
        assert!(extract_csv_points("a,b\n1,2").is_empty());
        assert!(extract_csv_points("").is_empty());
    }

    #[test]
    fn test_bad_rows_skipped_silently() {
        let points = extract_csv_points("lat,lon\nabc,def\n45.0,-93.0\n51.5\n,\n91.0,0.0");
        assert_eq!(points, vec![GeoPoint::new(45.0, -93.0)]);
    }
}
