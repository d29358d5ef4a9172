use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in decimal degrees.
///
/// Immutable value type with no identity; two points with equal coordinates
/// are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new range-checked geographic point.
    ///
    /// # Returns
    /// * `Ok(GeoPoint)` if both coordinates are in range
    /// * `Err(String)` describing the out-of-range coordinate
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to another point in kilometers (haversine).
    ///
    /// NaN coordinates propagate to a NaN distance; range validation is the
    /// constructor's job, not this function's.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_coordinates() {
        let point = GeoPoint::new(4.5339, -75.6811).unwrap();
        assert_eq!(point.latitude, 4.5339);
        assert_eq!(point.longitude, -75.6811);
    }

    #[test]
    fn test_new_rejects_out_of_range_latitude() {
        assert!(GeoPoint::new(90.1, 0.0).is_err());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_longitude() {
        assert!(GeoPoint::new(0.0, 180.5).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_new_accepts_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(4.5339, -75.6811).unwrap();
        assert_eq!(p.distance_km(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let p = GeoPoint::new(4.5339, -75.6811).unwrap();
        let q = GeoPoint::new(4.5315, -75.6804).unwrap();
        assert!((p.distance_km(&q) - q.distance_km(&p)).abs() < 1e-12);
    }

    #[test]
    fn test_distance_nearby_armenia_points() {
        // Two points in Armenia, Quindío, roughly 270 m apart.
        let p = GeoPoint::new(4.5339, -75.6811).unwrap();
        let q = GeoPoint::new(4.5315, -75.6804).unwrap();
        let d = p.distance_km(&q);
        assert!((d - 0.27).abs() < 0.05, "expected ~0.27 km, got {}", d);
    }

    #[test]
    fn test_distance_known_long_baseline() {
        // Bogotá to Medellín is roughly 215-250 km great-circle.
        let bogota = GeoPoint::new(4.7110, -74.0721).unwrap();
        let medellin = GeoPoint::new(6.2442, -75.5812).unwrap();
        let d = bogota.distance_km(&medellin);
        assert!(d > 200.0 && d < 260.0, "got {}", d);
    }

    #[test]
    fn test_distance_nan_propagates() {
        let p = GeoPoint {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        let q = GeoPoint::new(0.0, 0.0).unwrap();
        assert!(p.distance_km(&q).is_nan());
    }
}
