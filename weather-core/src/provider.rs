//! Abstractions over the two upstream collaborators.
//!
//! The widget talks to exactly two services per run: an IP-geolocation
//! lookup and a forecast lookup. Each sits behind a trait so the report
//! pipeline can be exercised without a network.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::WeatherError;
use crate::model::{Forecast, Location};

pub mod geojs;
pub mod openmeteo;

/// A stalled request is cut off after this long and surfaced as a
/// [`WeatherError::Network`] failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves where the widget is running.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Result<Location, WeatherError>;
}

/// Fetches the hourly series and current snapshot for a coordinate pair.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}

pub(crate) fn http_client() -> Result<Client, WeatherError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Keep error tooltips readable when a collaborator answers with a page of
/// HTML instead of JSON.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
