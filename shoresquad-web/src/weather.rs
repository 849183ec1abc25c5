//! Fetching the 4-day forecast from the NEA endpoint.
use shoresquad_core::{ForecastEntry, RawForecastResponse};
use thiserror::Error;

/// What the weather panel is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ForecastState {
    #[default]
    Idle,
    /// A request is in flight; the load control is disabled.
    Loading,
    Ready {
        updated: Option<String>,
        entries: Vec<ForecastEntry>,
    },
    Failed(String),
}

/// Public data.gov.sg endpoint for Singapore's 4-day weather outlook.
pub const FORECAST_URL: &str = "https://api.data.gov.sg/v1/environment/4-day-weather-forecast";

/// Why a forecast fetch produced nothing to render.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API error: {0}")]
    Status(u16),
    #[error("{0}")]
    Request(#[from] gloo_net::Error),
}

/// One GET against the forecast endpoint, returning the raw payload.
///
/// No retry and no app-level timeout; the caller guards against overlapping
/// requests by disabling the triggering control while one is in flight.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for a non-success HTTP status and
/// [`FetchError::Request`] when the request or the JSON decode fails.
#[allow(clippy::future_not_send)] // Wasm futures are single-threaded.
pub async fn fetch_four_day_forecast() -> Result<RawForecastResponse, FetchError> {
    let response = gloo_net::http::Request::get(FORECAST_URL).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json::<RawForecastResponse>().await?)
}
