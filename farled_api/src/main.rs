mod config;
mod docs;
mod error;
mod optimise;
mod state;

use crate::config::Config;
use crate::docs::docs_routes;
use crate::optimise::post::optimise_handler;
use crate::state::AppState;
use aide::axum::routing::post;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, serve};
use farled_providers::geocoding::GeocodingClient;
use farled_providers::travel_matrix_client::TravelMatrixClient;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = Config::from_env()?;

    let state = Arc::new(AppState {
        geocoding: GeocodingClient::new(config.graphhopper_api_key.clone()),
        matrix_client: TravelMatrixClient::new(Some(config.graphhopper_api_key.clone())),
        config,
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .api_route("/optimise", post(optimise_handler))
        .finish_api_with(&mut api, api_docs);

    if std::env::args().any(|a| a == "--generate-openapi") {
        use std::fs::File;
        use std::io::Write;

        let mut file = File::create("schemas/openapi.json")?;
        let spec = serde_json::to_string_pretty(&api)?;
        file.write_all(spec.as_bytes())?;
        info!("OpenAPI specification has been written to openapi.json");
        return Ok(());
    }

    let app = app
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("farled_api listening on http://{}", address);

    serve(listener, app).await?;

    Ok(())
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Farled Open API")
}
