use aide::OperationOutput;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use farled_providers::error::ProviderError;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    AddressNotFound(String),
    Upstream(String),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<ProviderError> for ApiError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::AddressNotFound(address) => ApiError::AddressNotFound(format!(
                "geocoding found no match for address \"{address}\""
            )),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::AddressNotFound(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Upstream(message) => (StatusCode::BAD_GATEWAY, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = Self;
}
