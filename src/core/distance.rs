use crate::core::{DistanceResult, GeoCoordinate};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const FREE_ZONE_RADIUS_KM: f64 = 30.0;

/// Great-circle distance in kilometers (haversine).
pub fn haversine_km(origin: GeoCoordinate, reference: GeoCoordinate) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = reference.latitude.to_radians();
    let d_lat = (reference.latitude - origin.latitude).to_radians();
    let d_lon = (reference.longitude - origin.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push a slightly past 1.0 near antipodes.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn classify(kilometers: f64) -> DistanceResult {
    DistanceResult {
        kilometers,
        within_free_zone: kilometers <= FREE_ZONE_RADIUS_KM,
    }
}

pub fn estimate(origin: GeoCoordinate, reference: GeoCoordinate) -> DistanceResult {
    let result = classify(haversine_km(origin, reference));
    tracing::debug!(
        "Distance from ({}, {}) to ({}, {}): {} km, free zone: {}",
        origin.latitude,
        origin.longitude,
        reference.latitude,
        reference.longitude,
        result.kilometers,
        result.within_free_zone
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ROUEN;

    fn point(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_same_point_is_zero_and_free() {
        let result = estimate(ROUEN.coordinate, ROUEN.coordinate);
        assert_eq!(result.kilometers, 0.0);
        assert!(result.within_free_zone);
    }

    #[test]
    fn test_paris_to_rouen() {
        let paris = point(48.8566, 2.3522);
        let result = estimate(paris, ROUEN.coordinate);
        assert!(result.kilometers > 111.0 && result.kilometers < 113.0);
        assert!(!result.within_free_zone);
        assert_eq!(result.display_km(), "112.1");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(classify(30.0).within_free_zone);
        assert!(!classify(30.0000001).within_free_zone);
        assert!(classify(0.0).within_free_zone);
    }

    #[test]
    fn test_antipodal_points() {
        let km = haversine_km(point(0.0, 0.0), point(0.0, 180.0));
        assert!((km - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);

        let poles = haversine_km(point(90.0, 0.0), point(-90.0, 0.0));
        assert!((poles - 20015.086796).abs() < 1e-3);
    }

    #[test]
    fn test_nearby_town_is_within_zone() {
        // Elbeuf, about 18 km south of Rouen
        let elbeuf = point(49.2866, 1.0075);
        let result = estimate(elbeuf, ROUEN.coordinate);
        assert!(result.kilometers > 15.0 && result.kilometers < 22.0);
        assert!(result.within_free_zone);
    }
}
