use farled_providers::geocoding::GeocodingClient;
use farled_providers::travel_matrix_client::TravelMatrixClient;

use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub geocoding: GeocodingClient,
    pub matrix_client: TravelMatrixClient,
}
