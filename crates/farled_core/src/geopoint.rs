use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const EARTH_RADIUS: f64 = 6_371_000.0;

/// A geocoded coordinate, serialized as `{ "lat": .., "lng": .. }`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl Into<geo_types::Point> for &GeoPoint {
    fn into(self) -> geo_types::Point {
        geo_types::Point::new(self.lng, self.lat)
    }
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Great-circle distance in meters between two lat/lon pairs.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_stockholm_uppsala() {
        let stockholm = GeoPoint::new(59.3293, 18.0686);
        let uppsala = GeoPoint::new(59.8586, 17.6389);

        let distance = stockholm.haversine_distance(&uppsala);

        // Roughly 63.5 km as the crow flies
        assert!(distance > 62_000.0 && distance < 66_000.0);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let point = GeoPoint::new(57.7089, 11.9746);
        assert_eq!(point.haversine_distance(&point), 0.0);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = GeoPoint::new(55.6050, 13.0038);
        let b = GeoPoint::new(56.0465, 12.6945);
        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
    }
}
