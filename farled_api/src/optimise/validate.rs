use jiff::civil;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::ApiError;

pub const MIN_ADDRESSES: usize = 2;
pub const MAX_ADDRESSES: usize = 23;

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimiseRequestBody {
    /// Street addresses to visit; the first one is the fixed starting point
    pub addresses: Vec<String>,

    /// Work day start, "HH:MM"
    pub work_start: String,

    /// Work day end, "HH:MM"
    pub work_end: String,
}

/// A validated request. The work window is checked and echoed but does not
/// influence the visiting order yet.
pub struct OptimiseRequest {
    pub addresses: Vec<String>,
    pub work_start: civil::Time,
    pub work_end: civil::Time,
}

pub fn validate_request(body: OptimiseRequestBody) -> Result<OptimiseRequest, ApiError> {
    if body.addresses.len() < MIN_ADDRESSES || body.addresses.len() > MAX_ADDRESSES {
        return Err(ApiError::BadRequest(format!(
            "\"addresses\" must contain between {MIN_ADDRESSES} and {MAX_ADDRESSES} address strings"
        )));
    }

    if body.addresses.iter().any(|address| address.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "every address must be a non-empty string".to_string(),
        ));
    }

    let Ok(work_start) = parse_work_time(&body.work_start) else {
        return Err(bad_time("workStart", &body.work_start));
    };
    let Ok(work_end) = parse_work_time(&body.work_end) else {
        return Err(bad_time("workEnd", &body.work_end));
    };

    Ok(OptimiseRequest {
        addresses: body.addresses,
        work_start,
        work_end,
    })
}

fn parse_work_time(raw: &str) -> Result<civil::Time, jiff::Error> {
    civil::Time::strptime("%H:%M", raw)
}

fn bad_time(field: &str, raw: &str) -> ApiError {
    ApiError::BadRequest(format!(
        "invalid time \"{raw}\": \"{field}\" must be given as HH:MM"
    ))
}
