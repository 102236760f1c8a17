use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::model::Location;

use super::{LocationProvider, http_client, truncate_body};

const GEOJS_URL: &str = "https://get.geojs.io/v1/ip/geo.json";
const SERVICE: &str = "geojs";

/// IP-based geolocation via geojs.io. Free, unauthenticated, no request
/// parameters: the service geolocates whichever address the call arrives
/// from.
#[derive(Debug, Clone)]
pub struct GeoJs {
    http: Client,
}

impl GeoJs {
    pub fn new() -> Result<Self, WeatherError> {
        Ok(Self {
            http: http_client()?,
        })
    }
}

#[async_trait]
impl LocationProvider for GeoJs {
    async fn locate(&self) -> Result<Location, WeatherError> {
        let res = self.http.get(GEOJS_URL).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Api {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: GeoResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::InvalidResponse {
                service: SERVICE,
                reason: e.to_string(),
            })?;

        parsed.into_location()
    }
}

/// geojs serializes coordinates as JSON strings, not numbers.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    latitude: String,
    longitude: String,
    city: String,
    country: String,
}

impl GeoResponse {
    fn into_location(self) -> Result<Location, WeatherError> {
        Ok(Location {
            latitude: parse_coord("latitude", &self.latitude)?,
            longitude: parse_coord("longitude", &self.longitude)?,
            city: self.city,
            country: self.country,
        })
    }
}

fn parse_coord(field: &str, raw: &str) -> Result<f64, WeatherError> {
    raw.trim()
        .parse()
        .map_err(|_| WeatherError::InvalidResponse {
            service: SERVICE,
            reason: format!("{field} is not a number: {raw:?}"),
        })
}
