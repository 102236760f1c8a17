use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::WeatherError;

/// Where the widget is running, resolved once per invocation from the
/// caller's IP address.
#[derive(Debug, Clone)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

/// Hourly forecast series in struct-of-arrays form, mirroring the Open-Meteo
/// payload. Index `i` of every vector describes the same instant; timestamps
/// are naive because the API already localizes them to the coordinates
/// (`timezone=auto`).
#[derive(Debug, Clone, Default)]
pub struct HourlyForecast {
    pub time: Vec<NaiveDateTime>,
    pub temperature_c: Vec<f64>,
    pub humidity_pct: Vec<f64>,
    pub wind_kmh: Vec<f64>,
    pub precip_prob_pct: Vec<i64>,
    pub weather_code: Vec<u8>,
}

impl HourlyForecast {
    /// Check the parallel-array invariant. A mismatch means the upstream
    /// payload was truncated or reordered and nothing can be rendered from
    /// it safely.
    pub fn validate(&self) -> Result<(), WeatherError> {
        if self.time.is_empty() {
            return Err(WeatherError::InvalidInput("hourly series is empty".into()));
        }

        let n = self.time.len();
        let lens = [
            self.temperature_c.len(),
            self.humidity_pct.len(),
            self.wind_kmh.len(),
            self.precip_prob_pct.len(),
            self.weather_code.len(),
        ];

        if lens.iter().any(|&len| len != n) {
            return Err(WeatherError::InvalidInput(format!(
                "hourly series arrays have mismatched lengths (time has {n} entries)"
            )));
        }

        Ok(())
    }
}

/// Single current-conditions snapshot, separate from the hourly grid.
#[derive(Debug, Clone, Copy)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub weather_code: u8,
}

#[derive(Debug, Clone)]
pub struct Forecast {
    pub hourly: HourlyForecast,
    pub current: CurrentConditions,
}

/// The single JSON line Waybar reads from stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusOutput {
    pub text: String,
    pub tooltip: String,
}

impl StatusOutput {
    /// Fallback pair emitted whenever fetching or validation fails; the bar
    /// still gets something to render.
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        Self {
            text: "⚠️ N/A".to_string(),
            tooltip: format!("Weather data unavailable: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hour(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn validate_accepts_aligned_arrays() {
        let series = HourlyForecast {
            time: vec![hour(0), hour(1)],
            temperature_c: vec![10.0, 11.0],
            humidity_pct: vec![80.0, 81.0],
            wind_kmh: vec![5.0, 6.0],
            precip_prob_pct: vec![0, 20],
            weather_code: vec![0, 61],
        };
        assert!(series.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_series() {
        let err = HourlyForecast::default().validate().unwrap_err();
        assert!(matches!(err, WeatherError::InvalidInput(_)));
    }

    #[test]
    fn validate_rejects_mismatched_lengths() {
        let series = HourlyForecast {
            time: vec![hour(0), hour(1)],
            temperature_c: vec![10.0],
            humidity_pct: vec![80.0, 81.0],
            wind_kmh: vec![5.0, 6.0],
            precip_prob_pct: vec![0, 20],
            weather_code: vec![0, 61],
        };
        let err = series.validate().unwrap_err();
        assert!(err.to_string().contains("mismatched lengths"));
    }

    #[test]
    fn unavailable_builds_the_fixed_fallback_pair() {
        let out = StatusOutput::unavailable("connection refused");
        assert_eq!(out.text, "⚠️ N/A");
        assert_eq!(out.tooltip, "Weather data unavailable: connection refused");
    }

    #[test]
    fn status_output_serializes_to_the_waybar_shape() {
        let out = StatusOutput {
            text: "☀️ 21°C".into(),
            tooltip: "line one\nline two".into(),
        };
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(
            json,
            r#"{"text":"☀️ 21°C","tooltip":"line one\nline two"}"#
        );
    }
}
