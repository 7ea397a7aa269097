use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::matrix::GraphHopperProfile;

/// Where the travel matrices come from.
#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug)]
pub enum TravelMatrixProvider {
    /// https://docs.graphhopper.com/openapi/matrix
    GraphHopperApi { gh_profile: GraphHopperProfile },

    AsTheCrowFlies { speed_kmh: f64 },
}
