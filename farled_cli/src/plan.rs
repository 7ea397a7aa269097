use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use farled_core::plan::plan_route;
use farled_providers::geocoding::GeocodingClient;
use farled_providers::matrix::GraphHopperProfile;
use farled_providers::travel_matrix_client::TravelMatrixClient;
use farled_providers::travel_matrix_provider::TravelMatrixProvider;
use futures::future::try_join_all;
use tracing::{info, warn};

use crate::parsers;

const API_KEY_ENV_VAR: &str = "GRAPHHOPPER_API_KEY";

#[derive(Args)]
pub struct PlanArgs {
    /// File with one address per line; the first line is the starting point
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Work day start, HH:MM
    #[arg(long, value_parser = parsers::parse_work_time, default_value = "08:00")]
    work_start: jiff::civil::Time,

    /// Work day end, HH:MM
    #[arg(long, value_parser = parsers::parse_work_time, default_value = "17:00")]
    work_end: jiff::civil::Time,

    /// Skip the matrix provider and assume straight-line driving at this
    /// average speed
    #[arg(long)]
    crow_flies_kmh: Option<f64>,
}

pub async fn run(args: PlanArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.input)?;
    let addresses: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    anyhow::ensure!(
        addresses.len() >= 2,
        "at least two addresses are required, {} found in {}",
        addresses.len(),
        args.input.display()
    );

    let api_key = std::env::var(API_KEY_ENV_VAR)
        .map_err(|_| anyhow::anyhow!("{API_KEY_ENV_VAR} must be set to geocode addresses"))?;

    let geocoding = GeocodingClient::new(api_key.clone());
    let lookups = addresses.iter().map(|address| geocoding.geocode(address));
    let coordinates = try_join_all(lookups).await?;

    let provider = match args.crow_flies_kmh {
        Some(speed_kmh) => TravelMatrixProvider::AsTheCrowFlies { speed_kmh },
        None => TravelMatrixProvider::GraphHopperApi {
            gh_profile: GraphHopperProfile::Car,
        },
    };

    let matrix_client = TravelMatrixClient::new(Some(api_key));
    let matrices = matrix_client.fetch_matrices(&coordinates, provider).await?;

    let plan = plan_route(&matrices);

    if plan.order.len() < addresses.len() {
        warn!(
            "{} of {} stops are unreachable and were left out",
            addresses.len() - plan.order.len(),
            addresses.len()
        );
    }

    let mut table = Table::new();
    table.set_header(["#", "Address", "Lat", "Lng"]);
    for (step, &index) in plan.order.iter().enumerate() {
        table.add_row([
            (step + 1).to_string(),
            addresses[index].clone(),
            format!("{:.5}", coordinates[index].lat),
            format!("{:.5}", coordinates[index].lng),
        ]);
    }

    println!("{table}");
    info!(
        "Total: {:.1} km, {:.0} min (work window {} - {})",
        plan.total_distance_meters / 1000.0,
        plan.total_duration_seconds / 60.0,
        args.work_start,
        args.work_end,
    );

    Ok(())
}
