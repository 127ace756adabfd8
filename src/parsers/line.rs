use crate::models::{is_valid_lat_lon, parse_decimal_degree, CoordinatePair, GeoPoint, InvalidEntry};

pub const REASON_MISSING_PAIR: &str = "Missing latitude/longitude pair";
pub const REASON_MISSING_QUAD: &str = "Expected lat1, lon1, lat2, lon2";
pub const REASON_NOT_A_NUMBER: &str = "Not a number";
pub const REASON_OUT_OF_RANGE: &str = "Out of range (-90 <= lat <= 90, -180 <= lon <= 180)";
pub const REASON_POINT_A_OUT_OF_RANGE: &str =
    "Point A out of range (-90 <= lat <= 90, -180 <= lon <= 180)";
pub const REASON_POINT_B_OUT_OF_RANGE: &str =
    "Point B out of range (-90 <= lat <= 90, -180 <= lon <= 180)";

/// Split raw text into trimmed, non-empty records (newline or semicolon
/// separated)
fn split_records(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == '\n' || c == ';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Split one record into fields on runs of commas and whitespace
fn split_fields(record: &str) -> Vec<&str> {
    record
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse delimiter-separated `lat,lon` records into validated points.
///
/// Every record maps to exactly one outcome: a `GeoPoint` in the first
/// list or an `InvalidEntry` in the second. Fields beyond the first two
/// are ignored. This function never fails; malformed input only grows
/// the invalid list.
pub fn parse_coordinate_pairs(text: &str) -> (Vec<GeoPoint>, Vec<InvalidEntry>) {
    let mut points = Vec::new();
    let mut invalid = Vec::new();

    for record in split_records(text) {
        let fields = split_fields(record);
        if fields.len() < 2 {
            invalid.push(InvalidEntry::new(record, REASON_MISSING_PAIR));
            continue;
        }

        let (lat, lon) = match (parse_decimal_degree(fields[0]), parse_decimal_degree(fields[1])) {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                invalid.push(InvalidEntry::new(record, REASON_NOT_A_NUMBER));
                continue;
            }
        };

        if !is_valid_lat_lon(lat, lon) {
            invalid.push(InvalidEntry::new(record, REASON_OUT_OF_RANGE));
            continue;
        }

        points.push(GeoPoint::new(lat, lon));
    }

    (points, invalid)
}

/// Parse delimiter-separated `lat1,lon1,lat2,lon2` records into validated
/// coordinate pairs, with the same per-record accounting as
/// [`parse_coordinate_pairs`].
pub fn parse_distance_pairs(text: &str) -> (Vec<CoordinatePair>, Vec<InvalidEntry>) {
    let mut pairs = Vec::new();
    let mut invalid = Vec::new();

    for record in split_records(text) {
        let fields = split_fields(record);
        if fields.len() < 4 {
            invalid.push(InvalidEntry::new(record, REASON_MISSING_QUAD));
            continue;
        }

        let mut values = [0.0_f64; 4];
        let mut numeric = true;
        for (slot, field) in values.iter_mut().zip(&fields[..4]) {
            match parse_decimal_degree(field) {
                Ok(value) => *slot = value,
                Err(_) => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric {
            invalid.push(InvalidEntry::new(record, REASON_NOT_A_NUMBER));
            continue;
        }

        let [lat1, lon1, lat2, lon2] = values;
        if !is_valid_lat_lon(lat1, lon1) {
            invalid.push(InvalidEntry::new(record, REASON_POINT_A_OUT_OF_RANGE));
            continue;
        }
        if !is_valid_lat_lon(lat2, lon2) {
            invalid.push(InvalidEntry::new(record, REASON_POINT_B_OUT_OF_RANGE));
            continue;
        }

        pairs.push(CoordinatePair::new(
            GeoPoint::new(lat1, lon1),
            GeoPoint::new(lat2, lon2),
        ));
    }

    (pairs, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_and_semicolon_records() {
        let (points, invalid) = parse_coordinate_pairs("45.0,-93.0\n51.5, -0.13;  -33.9 151.2  ");
        assert!(invalid.is_empty());
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], GeoPoint::new(45.0, -93.0));
        assert_eq!(points[2], GeoPoint::new(-33.9, 151.2));
    }

    #[test]
    fn test_collapsed_delimiter_runs() {
        let (points, invalid) = parse_coordinate_pairs("45.0 ,,  -93.0");
        assert!(invalid.is_empty());
        assert_eq!(points, vec![GeoPoint::new(45.0, -93.0)]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let (points, invalid) = parse_coordinate_pairs("45.0,-93.0,extra,junk");
        assert!(invalid.is_empty());
        assert_eq!(points, vec![GeoPoint::new(45.0, -93.0)]);
    }

    #[test]
    fn test_missing_field() {
        let (points, invalid) = parse_coordinate_pairs("45.0");
        assert!(points.is_empty());
        assert_eq!(invalid, vec![InvalidEntry::new("45.0", REASON_MISSING_PAIR)]);
    }

    #[test]
    fn test_not_a_number() {
        let (points, invalid) = parse_coordinate_pairs("abc,def");
        assert!(points.is_empty());
        assert_eq!(invalid, vec![InvalidEntry::new("abc,def", REASON_NOT_A_NUMBER)]);
    }

    #[test]
    fn test_out_of_range() {
        let (points, invalid) = parse_coordinate_pairs("91,0");
        assert!(points.is_empty());
        assert_eq!(invalid, vec![InvalidEntry::new("91,0", REASON_OUT_OF_RANGE)]);
    }

    #[test]
    fn test_mixed_outcomes_keep_order() {
        let (points, invalid) = parse_coordinate_pairs("abc\n45.0,-93.0\n91,0");
        assert_eq!(points, vec![GeoPoint::new(45.0, -93.0)]);
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].raw, "abc");
        assert_eq!(invalid[0].reason, REASON_MISSING_PAIR);
        assert_eq!(invalid[1].raw, "91,0");
    }

    #[test]
    fn test_empty_input() {
        let (points, invalid) = parse_coordinate_pairs("");
        assert!(points.is_empty());
        assert!(invalid.is_empty());

        let (points, invalid) = parse_coordinate_pairs(" ;; \n\n ");
        assert!(points.is_empty());
        assert!(invalid.is_empty());
    }

    #[test]
    fn test_distance_pairs() {
        let (pairs, invalid) = parse_distance_pairs("0,0,0,1\n45.0 -93.0 51.5 -0.13");
        assert!(invalid.is_empty());
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].a, GeoPoint::new(0.0, 0.0));
        assert_eq!(pairs[0].b, GeoPoint::new(0.0, 1.0));
    }

    #[test]
    fn test_distance_pair_reasons() {
        let (pairs, invalid) = parse_distance_pairs("1,2,3\nx,0,0,0\n91,0,0,0\n0,0,0,181");
        assert!(pairs.is_empty());
        assert_eq!(invalid.len(), 4);
        assert_eq!(invalid[0].reason, REASON_MISSING_QUAD);
        assert_eq!(invalid[1].reason, REASON_NOT_A_NUMBER);
        assert_eq!(invalid[2].reason, REASON_POINT_A_OUT_OF_RANGE);
        assert_eq!(invalid[3].reason, REASON_POINT_B_OUT_OF_RANGE);
    }
}
