//! The forecast formatter: turns a location, an hourly series and a current
//! snapshot into the `{text, tooltip}` pair Waybar renders.
//!
//! Pure transformation. The run instant is passed in by the caller and used
//! for every day/hour comparison, so identical inputs at the same instant
//! always produce byte-identical output.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};

use crate::codes;
use crate::error::WeatherError;
use crate::model::{Forecast, Location, StatusOutput};

/// Sampling stride over the hourly grid: one tooltip line every three hours.
const STEP: usize = 3;

/// Days shown in the tooltip, counting today.
const WINDOW_DAYS: i64 = 3;

/// Build the status pair from a resolved location, a validated-on-entry
/// forecast and the wall-clock instant of the run.
pub fn format_status(
    location: &Location,
    forecast: &Forecast,
    now: DateTime<Local>,
) -> Result<StatusOutput, WeatherError> {
    forecast.hourly.validate()?;

    let hourly = &forecast.hourly;
    let today = now.date_naive();
    let mut lines: Vec<String> = Vec::new();
    let mut current_day: Option<i64> = None;

    for i in (0..hourly.time.len()).step_by(STEP) {
        let point = hourly.time[i];
        let day_offset = (point.date() - today).num_days();

        if day_offset < 0 {
            // Elapsed day; the query window starts today, so this is
            // defensive only.
            continue;
        }
        if day_offset >= WINDOW_DAYS {
            break;
        }

        if current_day != Some(day_offset) {
            if current_day.is_some() {
                lines.push(String::new());
            }
            lines.push(day_header(day_offset, point, location));
            current_day = Some(day_offset);
        }

        // For today, drop buckets already behind us but keep the current
        // 3-hour block. The `<` against `now - STEP + 1` is deliberate:
        // at 14:00 the 12:00 bucket is still the live one.
        if day_offset == 0
            && i64::from(point.hour()) < i64::from(now.hour()) - STEP as i64 + 1
        {
            continue;
        }

        let info = codes::lookup(hourly.weather_code[i]);
        let precip = hourly.precip_prob_pct[i];
        let precip_str = if precip > 0 {
            format!("☔ {precip}% ")
        } else {
            String::new()
        };

        lines.push(format!(
            "{:02}:00 {} {}°C | 💨 {}km/h 💧 {}% | {}{}",
            point.hour(),
            info.icon,
            hourly.temperature_c[i].round() as i64,
            hourly.wind_kmh[i].round() as i64,
            hourly.humidity_pct[i].round() as i64,
            precip_str,
            info.description,
        ));
    }

    let current = forecast.current;
    let icon = codes::lookup(current.weather_code).icon;

    Ok(StatusOutput {
        text: format!("{icon} {}°C", current.temperature_c.round() as i64),
        tooltip: lines.join("\n"),
    })
}

/// Day headers carry Pango bold markup, which is what the Waybar tooltip
/// renders. Today's header additionally names the resolved place.
fn day_header(day_offset: i64, point: NaiveDateTime, location: &Location) -> String {
    let date = format!("{:02}/{:02}/{}", point.day(), point.month(), point.year());
    match day_offset {
        0 => format!(
            "<b>Today, {date}, {} ({})</b>",
            location.city, location.country
        ),
        1 => format!("<b>Tomorrow, {date}</b>"),
        _ => format!("<b>{date}</b>"),
    }
}
