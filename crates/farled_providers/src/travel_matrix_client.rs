use farled_core::travel_matrices::TravelMatrices;

use crate::{
    as_the_crow_flies::as_the_crow_flies_matrices,
    error::ProviderError,
    matrix::GraphHopperMatrixClient,
    travel_matrix_provider::TravelMatrixProvider,
};

/// Dispatches matrix fetches to the configured provider. The GraphHopper
/// client is only constructed when an API key is available; requesting the
/// GraphHopper provider without one fails with
/// [`ProviderError::MissingApiKey`].
pub struct TravelMatrixClient {
    graphhopper_client: Option<GraphHopperMatrixClient>,
}

impl TravelMatrixClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            graphhopper_client: api_key.map(GraphHopperMatrixClient::new),
        }
    }

    pub async fn fetch_matrices<P>(
        &self,
        points: &[P],
        provider: TravelMatrixProvider,
    ) -> Result<TravelMatrices, ProviderError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        match provider {
            TravelMatrixProvider::GraphHopperApi { gh_profile } => {
                let client = self
                    .graphhopper_client
                    .as_ref()
                    .ok_or(ProviderError::MissingApiKey)?;

                client.fetch_matrices(points, gh_profile).await
            }
            TravelMatrixProvider::AsTheCrowFlies { speed_kmh } => {
                Ok(as_the_crow_flies_matrices(points, speed_kmh))
            }
        }
    }
}
