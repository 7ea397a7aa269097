use farled_core::geopoint::haversine_distance;
use farled_core::travel_matrices::TravelMatrices;

/// Builds straight-line matrices: haversine distances, durations derived
/// from a constant average speed. Every pair is reachable.
pub fn as_the_crow_flies_matrices<P>(points: &[P], speed_kmh: f64) -> TravelMatrices
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    let n = points.len();
    let speed = speed_kmh / 3.6;

    let mut distances = vec![0.0; n * n];
    let mut durations = vec![0.0; n * n];

    for (i, from) in points.iter().enumerate() {
        let from: geo_types::Point = from.into();
        for (j, to) in points.iter().enumerate() {
            let to: geo_types::Point = to.into();
            let meters = haversine_distance(from.y(), from.x(), to.y(), to.x());

            distances[i * n + j] = meters;
            durations[i * n + j] = meters / speed;
        }
    }

    TravelMatrices::from_flat(distances, durations)
}
