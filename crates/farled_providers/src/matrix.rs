use std::fmt::Display;

use farled_core::travel_matrices::TravelMatrices;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;

pub type GHPoint = [f64; 2];

#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GraphHopperProfile {
    Car,
    Bike,
    Foot,
    SmallTruck,
    Truck,
}

impl Display for GraphHopperProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GraphHopperProfile::Car => "car",
                GraphHopperProfile::Bike => "bike",
                GraphHopperProfile::Foot => "foot",
                GraphHopperProfile::SmallTruck => "small_truck",
                GraphHopperProfile::Truck => "truck",
            }
        )
    }
}

#[derive(Debug, Clone, Serialize)]
struct MatrixRequestBody {
    /// Points for a symmetric all-to-all matrix, as `[lng, lat]`
    points: Vec<GHPoint>,

    /// Which arrays to return: "times", "distances"
    out_arrays: Vec<String>,

    /// Routing profile (e.g., "car", "bike", "foot")
    profile: String,

    /// With `fail_fast` off, pairs with no valid route come back as null
    /// cells instead of failing the whole request
    fail_fast: bool,
}

/// A cell is `None` when the provider found no route for the pair.
#[derive(Deserialize)]
struct MatrixResponse {
    /// Travel times in seconds
    times: Vec<Vec<Option<f64>>>,

    /// Distances in meters
    distances: Vec<Vec<Option<f64>>>,
}

pub const GRAPHHOPPER_MATRIX_API_URL: &str = "https://graphhopper.com/api/1/matrix";

pub struct GraphHopperMatrixClient {
    api_key: String,
    client: reqwest::Client,
}

impl GraphHopperMatrixClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the all-to-all distance/duration matrices for `points`.
    /// Per-pair failures are absorbed into `f64::INFINITY` entries.
    pub async fn fetch_matrices<P>(
        &self,
        points: &[P],
        profile: GraphHopperProfile,
    ) -> Result<TravelMatrices, ProviderError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let gh_points: Vec<GHPoint> = points
            .iter()
            .map(|p| {
                let point: geo_types::Point = p.into();
                [point.x(), point.y()]
            })
            .collect();

        let body = MatrixRequestBody {
            points: gh_points,
            out_arrays: vec!["times".to_string(), "distances".to_string()],
            profile: profile.to_string(),
            fail_fast: false,
        };

        debug!(
            "GraphHopperMatrixClient: Requesting {}x{} matrix",
            points.len(),
            points.len()
        );

        let response = self
            .client
            .post(GRAPHHOPPER_MATRIX_API_URL)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await?;

        let solution = self.handle_response(response).await?;

        Ok(matrices_from_response(solution))
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<MatrixResponse, ProviderError> {
        if response.status().is_success() {
            let matrix_response: MatrixResponse = response.json().await?;
            Ok(matrix_response)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(ProviderError::Api { status, message })
        }
    }
}

fn matrices_from_response(response: MatrixResponse) -> TravelMatrices {
    let distances = response
        .distances
        .into_iter()
        .flatten()
        .map(|cell| cell.unwrap_or(f64::INFINITY))
        .collect();
    let durations = response
        .times
        .into_iter()
        .flatten()
        .map(|cell| cell.unwrap_or(f64::INFINITY))
        .collect();

    TravelMatrices::from_flat(distances, durations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_cells_become_infinite() {
        let json = r#"{
            "distances": [[0, 9204, null], [9203, 0, 3231], [null, 3230, 0]],
            "times": [[0, 840, null], [839, 0, 291], [null, 290, 0]]
        }"#;

        let response: MatrixResponse = serde_json::from_str(json).unwrap();
        let matrices = matrices_from_response(response);

        assert_eq!(matrices.len(), 3);
        assert_eq!(matrices.distance(0, 1), 9204.0);
        assert_eq!(matrices.distance(1, 0), 9203.0);
        assert!(matrices.distance(0, 2).is_infinite());
        assert!(matrices.duration(0, 2).is_infinite());
        assert_eq!(matrices.duration(1, 2), 291.0);
    }

    #[test]
    fn test_request_body_shape() {
        let body = MatrixRequestBody {
            points: vec![[18.0686, 59.3293], [17.6389, 59.8586]],
            out_arrays: vec!["times".to_string(), "distances".to_string()],
            profile: GraphHopperProfile::Car.to_string(),
            fail_fast: false,
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["profile"], "car");
        assert_eq!(json["fail_fast"], false);
        assert_eq!(json["points"][0][0], 18.0686);
        assert_eq!(json["out_arrays"][1], "distances");
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(GraphHopperProfile::SmallTruck.to_string(), "small_truck");
        assert_eq!(GraphHopperProfile::Car.to_string(), "car");
    }
}
