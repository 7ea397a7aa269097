use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("no geocoding result for address \"{0}\"")]
    AddressNotFound(String),

    #[error("GRAPHHOPPER_API_KEY is not configured")]
    MissingApiKey,

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}
