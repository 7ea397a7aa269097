pub mod geopoint;
pub mod nearest_neighbor;
pub mod plan;
pub mod travel_matrices;
