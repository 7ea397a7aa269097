use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use farled_core::geopoint::GeoPoint;
use farled_core::plan::{RoutePlan, plan_route};
use farled_providers::matrix::GraphHopperProfile;
use farled_providers::travel_matrix_provider::TravelMatrixProvider;
use futures::future::try_join_all;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::optimise::validate::{OptimiseRequestBody, validate_request};
use crate::state::AppState;

#[derive(Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimiseResponse {
    /// Input addresses permuted into visiting order
    pub ordered: Vec<String>,

    /// Total driving distance in km, one decimal
    pub total_distance_km: f64,

    /// Total driving time in whole minutes
    pub total_duration_min: i64,

    /// Geocoded coordinates in visiting order
    pub coordinates: Vec<GeoPoint>,
}

impl OptimiseResponse {
    fn new(plan: RoutePlan, addresses: &[String], coordinates: &[GeoPoint]) -> Self {
        OptimiseResponse {
            ordered: plan
                .order
                .iter()
                .map(|&index| addresses[index].clone())
                .collect(),
            total_distance_km: round_km(plan.total_distance_meters),
            total_duration_min: round_minutes(plan.total_duration_seconds),
            coordinates: plan.order.iter().map(|&index| coordinates[index]).collect(),
        }
    }
}

fn round_km(meters: f64) -> f64 {
    (meters / 100.0).round() / 10.0
}

fn round_minutes(seconds: f64) -> i64 {
    (seconds / 60.0).round() as i64
}

pub async fn optimise_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OptimiseRequestBody>,
) -> Result<Json<OptimiseResponse>, ApiError> {
    let request = validate_request(body)?;

    // One independent lookup per address, joined on all results or the
    // first failure.
    let lookups = request
        .addresses
        .iter()
        .map(|address| state.geocoding.geocode(address));
    let coordinates = try_join_all(lookups).await?;

    let matrices = state
        .matrix_client
        .fetch_matrices(
            &coordinates,
            TravelMatrixProvider::GraphHopperApi {
                gh_profile: GraphHopperProfile::Car,
            },
        )
        .await?;

    let plan = plan_route(&matrices);

    info!(
        "Planned {}/{} stops, work window {} - {}",
        plan.order.len(),
        request.addresses.len(),
        request.work_start,
        request.work_end,
    );

    Ok(Json(OptimiseResponse::new(
        plan,
        &request.addresses,
        &coordinates,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_km_to_one_decimal() {
        assert_eq!(round_km(0.0), 0.0);
        assert_eq!(round_km(9204.0), 9.2);
        assert_eq!(round_km(9250.0), 9.3);
        assert_eq!(round_km(149.0), 0.1);
    }

    #[test]
    fn test_round_minutes_to_whole() {
        assert_eq!(round_minutes(0.0), 0);
        assert_eq!(round_minutes(89.0), 1);
        assert_eq!(round_minutes(90.0), 2);
        assert_eq!(round_minutes(3600.0), 60);
    }

    #[test]
    fn test_response_permutes_addresses_and_coordinates() {
        let addresses = vec![
            "Kungsgatan 1, Stockholm".to_string(),
            "Storgatan 5, Uppsala".to_string(),
            "Ågatan 9, Enköping".to_string(),
        ];
        let coordinates = vec![
            GeoPoint::new(59.33, 18.07),
            GeoPoint::new(59.86, 17.64),
            GeoPoint::new(59.64, 17.08),
        ];
        let plan = RoutePlan {
            order: vec![0, 2, 1],
            total_distance_meters: 4000.0,
            total_duration_seconds: 420.0,
        };

        let response = OptimiseResponse::new(plan, &addresses, &coordinates);

        assert_eq!(
            response.ordered,
            vec![
                "Kungsgatan 1, Stockholm",
                "Ågatan 9, Enköping",
                "Storgatan 5, Uppsala",
            ]
        );
        assert_eq!(response.coordinates[1], GeoPoint::new(59.64, 17.08));
        assert_eq!(response.total_distance_km, 4.0);
        assert_eq!(response.total_duration_min, 7);
    }

    #[test]
    fn test_truncated_plan_yields_truncated_response() {
        let addresses = vec![
            "Kungsgatan 1, Stockholm".to_string(),
            "Storgatan 5, Uppsala".to_string(),
            "Ågatan 9, Enköping".to_string(),
        ];
        let coordinates = vec![
            GeoPoint::new(59.33, 18.07),
            GeoPoint::new(59.86, 17.64),
            GeoPoint::new(59.64, 17.08),
        ];
        let plan = RoutePlan {
            order: vec![0],
            total_distance_meters: 0.0,
            total_duration_seconds: 0.0,
        };

        let response = OptimiseResponse::new(plan, &addresses, &coordinates);

        assert_eq!(response.ordered, vec!["Kungsgatan 1, Stockholm"]);
        assert_eq!(response.coordinates.len(), 1);
        assert_eq!(response.total_distance_km, 0.0);
        assert_eq!(response.total_duration_min, 0);
    }
}
