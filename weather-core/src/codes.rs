//! Static WMO weather-code table.
//!
//! Open-Meteo reports conditions as WMO interpretation codes, sparse in
//! 0..=99. The table is fixed; anything unlisted resolves to [`UNKNOWN`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub icon: &'static str,
    pub description: &'static str,
}

/// Fallback for codes the table does not know about.
pub const UNKNOWN: WeatherInfo = w("🌡️", "Unknown");

const fn w(icon: &'static str, description: &'static str) -> WeatherInfo {
    WeatherInfo { icon, description }
}

/// Map a WMO weather code to its display icon and description.
pub fn lookup(code: u8) -> WeatherInfo {
    match code {
        0 => w("☀️", "Clear sky"),
        1 => w("🌤️", "Mainly clear"),
        2 => w("⛅", "Partly cloudy"),
        3 => w("☁️", "Overcast"),
        45 => w("🌫️", "Fog"),
        48 => w("🌫️", "Depositing rime fog"),
        51 => w("🌧️", "Light drizzle"),
        53 => w("🌧️", "Moderate drizzle"),
        55 => w("🌧️", "Dense drizzle"),
        56 => w("❄️", "Light freezing drizzle"),
        57 => w("❄️", "Dense freezing drizzle"),
        61 => w("🌧️", "Slight rain"),
        63 => w("🌧️", "Moderate rain"),
        65 => w("🌧️", "Heavy rain"),
        66 => w("❄️", "Light freezing rain"),
        67 => w("❄️", "Heavy freezing rain"),
        71 => w("❄️", "Slight snow fall"),
        73 => w("❄️", "Moderate snow fall"),
        75 => w("❄️", "Heavy snow fall"),
        77 => w("❄️", "Snow grains"),
        80 => w("🌧️", "Slight rain showers"),
        81 => w("🌧️", "Moderate rain showers"),
        82 => w("🌧️", "Violent rain showers"),
        85 => w("❄️", "Slight snow showers"),
        86 => w("❄️", "Heavy snow showers"),
        95 => w("⛈️", "Thunderstorm"),
        96 => w("⛈️", "Thunderstorm with slight hail"),
        99 => w("⛈️", "Thunderstorm with heavy hail"),
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(lookup(0).description, "Clear sky");
        assert_eq!(lookup(95).icon, "⛈️");
        assert_eq!(lookup(61), w("🌧️", "Slight rain"));
    }

    #[test]
    fn every_unlisted_code_falls_back() {
        // Holes inside the range as well as values past it.
        for code in [4, 42, 47, 50, 78, 97, 98, 100, 200, 255] {
            assert_eq!(lookup(code), UNKNOWN);
        }
        assert_eq!(UNKNOWN.icon, "🌡️");
        assert_eq!(UNKNOWN.description, "Unknown");
    }
}
