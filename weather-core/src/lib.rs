//! Core library for the Waybar weather widget.
//!
//! This crate defines:
//! - Shared domain models (location, hourly series, status output)
//! - The static WMO weather-code table
//! - The forecast formatter that builds the `{text, tooltip}` pair
//! - Abstractions over the geolocation and forecast collaborators
//!
//! It is used by `weather-bar`, but can also be reused by other binaries or
//! services that want the same grouped-tooltip rendering.

pub mod codes;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod report;

pub use error::WeatherError;
pub use format::format_status;
pub use model::{CurrentConditions, Forecast, HourlyForecast, Location, StatusOutput};
pub use provider::{ForecastProvider, LocationProvider, geojs::GeoJs, openmeteo::OpenMeteo};
