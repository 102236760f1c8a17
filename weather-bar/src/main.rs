//! Binary crate for the Waybar weather widget.
//!
//! Waybar runs this executable on an interval and renders whatever single
//! JSON line lands on stdout, so a `{text, tooltip}` pair is printed on
//! every run, success or failure, and the process always exits cleanly.
//! Diagnostics go to stderr only; stdout belongs to the bar.

use chrono::{DateTime, Local};
use weather_core::{GeoJs, OpenMeteo, StatusOutput, WeatherError, report};

async fn collect(now: DateTime<Local>) -> Result<StatusOutput, WeatherError> {
    let locator = GeoJs::new()?;
    let forecaster = OpenMeteo::new()?;

    report::status(&locator, &forecaster, now).await
}

fn emit(output: &StatusOutput) {
    match serde_json::to_string(output) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            tracing::error!("failed to serialize status output: {e}");
            println!(
                r#"{{"text":"⚠️ N/A","tooltip":"Weather data unavailable: serialization error"}}"#
            );
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Captured once so every day/hour comparison in the formatter agrees.
    let now = Local::now();

    let output = match collect(now).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("weather update failed: {e}");
            StatusOutput::unavailable(&e)
        }
    };

    emit(&output);
}
