pub mod as_the_crow_flies;
pub mod error;
pub mod geocoding;
pub mod matrix;
pub mod travel_matrix_client;
pub mod travel_matrix_provider;
