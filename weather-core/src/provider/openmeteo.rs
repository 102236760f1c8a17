use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::model::{CurrentConditions, Forecast, HourlyForecast};

use super::{ForecastProvider, http_client, truncate_body};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const SERVICE: &str = "open-meteo";

/// Hourly variables requested from the API. `apparent_temperature` is part
/// of the upstream contract even though the tooltip does not show it.
const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                             precipitation_probability,weather_code,wind_speed_10m";

/// The tooltip window: today plus two more days.
const FORECAST_DAYS: u8 = 3;

/// Open-Meteo returns localized timestamps without an offset, e.g.
/// "2025-06-10T14:00".
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Forecast lookup via api.open-meteo.com. Free, unauthenticated;
/// `timezone=auto` localizes the hourly grid to the coordinates.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    http: Client,
}

impl OpenMeteo {
    pub fn new() -> Result<Self, WeatherError> {
        Ok(Self {
            http: http_client()?,
        })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteo {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError> {
        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Api {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OmResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::InvalidResponse {
                service: SERVICE,
                reason: e.to_string(),
            })?;

        parsed.into_forecast()
    }
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
    precipitation_probability: Vec<i64>,
    weather_code: Vec<u8>,
    wind_speed_10m: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature: f64,
    weathercode: u8,
}

/// Both blocks are optional at the JSON level so their absence surfaces as
/// a structured invalid-response error rather than a serde type error.
#[derive(Debug, Deserialize)]
struct OmResponse {
    hourly: Option<OmHourly>,
    current_weather: Option<OmCurrent>,
}

impl OmResponse {
    fn into_forecast(self) -> Result<Forecast, WeatherError> {
        let hourly = self
            .hourly
            .ok_or_else(|| missing("response has no hourly block"))?;
        let current = self
            .current_weather
            .ok_or_else(|| missing("response has no current_weather block"))?;

        let time = hourly
            .time
            .iter()
            .map(|raw| {
                NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
                    .map_err(|e| missing(&format!("bad hourly timestamp {raw:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let forecast = Forecast {
            hourly: HourlyForecast {
                time,
                temperature_c: hourly.temperature_2m,
                humidity_pct: hourly.relative_humidity_2m,
                wind_kmh: hourly.wind_speed_10m,
                precip_prob_pct: hourly.precipitation_probability,
                weather_code: hourly.weather_code,
            },
            current: CurrentConditions {
                temperature_c: current.temperature,
                weather_code: current.weathercode,
            },
        };

        forecast.hourly.validate()?;
        Ok(forecast)
    }
}

fn missing(reason: &str) -> WeatherError {
    WeatherError::InvalidResponse {
        service: SERVICE,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const FIXTURE: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "timezone": "Europe/Berlin",
        "hourly": {
            "time": ["2025-06-10T00:00", "2025-06-10T01:00", "2025-06-10T02:00"],
            "temperature_2m": [14.2, 13.8, 13.5],
            "relative_humidity_2m": [78.0, 80.0, 83.0],
            "apparent_temperature": [13.1, 12.6, 12.2],
            "precipitation_probability": [0, 10, 35],
            "weather_code": [1, 2, 61],
            "wind_speed_10m": [8.4, 7.9, 9.2]
        },
        "current_weather": {
            "temperature": 14.6,
            "windspeed": 8.1,
            "winddirection": 230,
            "weathercode": 2,
            "is_day": 0,
            "time": "2025-06-10T00:15"
        }
    }"#;

    #[test]
    fn converts_the_wire_shape_into_the_domain_forecast() {
        let parsed: OmResponse = serde_json::from_str(FIXTURE).unwrap();
        let forecast = parsed.into_forecast().unwrap();

        assert_eq!(forecast.hourly.time.len(), 3);
        assert_eq!(forecast.hourly.time[1].hour(), 1);
        assert_eq!(forecast.hourly.weather_code[2], 61);
        assert_eq!(forecast.hourly.precip_prob_pct, vec![0, 10, 35]);
        assert!((forecast.current.temperature_c - 14.6).abs() < 1e-9);
        assert_eq!(forecast.current.weather_code, 2);
    }

    #[test]
    fn missing_hourly_block_is_rejected() {
        let body = r#"{"current_weather": {"temperature": 10.0, "weathercode": 0}}"#;
        let parsed: OmResponse = serde_json::from_str(body).unwrap();
        let err = parsed.into_forecast().unwrap_err();
        assert!(err.to_string().contains("no hourly block"));
    }

    #[test]
    fn missing_current_weather_is_rejected() {
        let body = r#"{
            "hourly": {
                "time": ["2025-06-10T00:00"],
                "temperature_2m": [14.2],
                "relative_humidity_2m": [78.0],
                "precipitation_probability": [0],
                "weather_code": [1],
                "wind_speed_10m": [8.4]
            }
        }"#;
        let parsed: OmResponse = serde_json::from_str(body).unwrap();
        let err = parsed.into_forecast().unwrap_err();
        assert!(err.to_string().contains("no current_weather block"));
    }

    #[test]
    fn unparseable_timestamps_are_rejected() {
        let body = FIXTURE.replace("2025-06-10T01:00", "yesterday-ish");
        let parsed: OmResponse = serde_json::from_str(&body).unwrap();
        let err = parsed.into_forecast().unwrap_err();
        assert!(err.to_string().contains("bad hourly timestamp"));
    }

    #[test]
    fn length_mismatch_from_upstream_is_rejected() {
        let body = FIXTURE.replace("[8.4, 7.9, 9.2]", "[8.4, 7.9]");
        let parsed: OmResponse = serde_json::from_str(&body).unwrap();
        let err = parsed.into_forecast().unwrap_err();
        assert!(matches!(err, WeatherError::InvalidInput(_)));
    }
}
