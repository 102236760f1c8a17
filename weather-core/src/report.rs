//! The two-step pipeline behind every bar refresh: geolocate, fetch the
//! forecast for those coordinates, format. Each step short-circuits on
//! failure; nothing is retried and nothing is cached.

use chrono::{DateTime, Local};

use crate::error::WeatherError;
use crate::format;
use crate::model::StatusOutput;
use crate::provider::{ForecastProvider, LocationProvider};

/// Produce the status pair for one run. `now` is captured once by the
/// caller so every day/hour comparison inside the formatter agrees.
pub async fn status(
    locator: &dyn LocationProvider,
    forecaster: &dyn ForecastProvider,
    now: DateTime<Local>,
) -> Result<StatusOutput, WeatherError> {
    let location = locator.locate().await?;
    let forecast = forecaster
        .forecast(location.latitude, location.longitude)
        .await?;

    format::format_status(&location, &forecast, now)
}
