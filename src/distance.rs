use crate::models::GeoPoint;
use crate::utils::constants::{EARTH_RADIUS_KM, KM_TO_MILES};

/// Great-circle distance between two points in kilometres.
///
/// Haversine formula on a sphere of mean earth radius; the `atan2` form
/// stays numerically stable for nearly antipodal points.
///
/// # Examples
/// ```
/// use coord_processor::distance::haversine_km;
/// use coord_processor::models::GeoPoint;
///
/// let london = GeoPoint::new(51.5074, -0.1278);
/// let edinburgh = GeoPoint::new(55.9533, -3.1883);
/// let km = haversine_km(&london, &edinburgh);
/// assert!((km - 534.0).abs() < 10.0);
/// ```
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Convert kilometres to statute miles
pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let km = haversine_km(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0));
        assert!((km - 111.19).abs() < 0.5, "got {}", km);
    }

    #[test]
    fn test_identical_points() {
        let point = GeoPoint::new(51.5074, -0.1278);
        assert_eq!(haversine_km(&point, &point), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let edinburgh = GeoPoint::new(55.9533, -3.1883);
        let forward = haversine_km(&london, &edinburgh);
        let back = haversine_km(&edinburgh, &london);
        assert!((forward - back).abs() < 1e-9);
    }

    #[test]
    fn test_known_city_pair() {
        // London to Edinburgh, ~534 km
        let km = haversine_km(
            &GeoPoint::new(51.5074, -0.1278),
            &GeoPoint::new(55.9533, -3.1883),
        );
        assert!((km - 534.0).abs() < 10.0);
    }

    #[test]
    fn test_km_to_miles() {
        assert!((km_to_miles(100.0) - 62.1371).abs() < 1e-9);
        assert_eq!(km_to_miles(0.0), 0.0);
    }
}
