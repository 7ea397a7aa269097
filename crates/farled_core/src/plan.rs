use crate::nearest_neighbor::nearest_neighbor_order;
use crate::travel_matrices::TravelMatrices;

/// A visiting order together with the travel totals along it.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// Location indices in visiting order. May be shorter than the matrix
    /// side length, see [`nearest_neighbor_order`].
    pub order: Vec<usize>,
    pub total_distance_meters: f64,
    pub total_duration_seconds: f64,
}

/// Runs the nearest-neighbor orderer and sums distance and duration over the
/// consecutive pairs of the resulting order, using the same matrices the
/// order was built from.
pub fn plan_route(matrices: &TravelMatrices) -> RoutePlan {
    let order = nearest_neighbor_order(matrices);

    let mut total_distance_meters = 0.0;
    let mut total_duration_seconds = 0.0;

    for pair in order.windows(2) {
        total_distance_meters += matrices.distance(pair[0], pair[1]);
        total_duration_seconds += matrices.duration(pair[0], pair[1]);
    }

    RoutePlan {
        order,
        total_distance_meters,
        total_duration_seconds,
    }
}
