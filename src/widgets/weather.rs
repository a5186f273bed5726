use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::{config::Config, fetcher::api_client, widgets::WidgetError};

pub const DEFAULT_CITY: &str = "New York";
pub const DEFAULT_LAT: f64 = 40.7128;
pub const DEFAULT_LON: f64 = -74.006;

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";

const FALLBACK_TEMPERATURE: f64 = 22.0;
const FALLBACK_FEELS_LIKE: f64 = 20.0;
const FALLBACK_HUMIDITY: f64 = 65.0;
const FALLBACK_WIND: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind: f64,
    pub condition: String,
    pub updated_at: String,
}

impl WeatherReport {
    pub fn fallback(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: FALLBACK_TEMPERATURE,
            feels_like: FALLBACK_FEELS_LIKE,
            humidity: FALLBACK_HUMIDITY,
            wind: FALLBACK_WIND,
            condition: "Clear sky".to_string(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<Current>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Current {
    time: Option<String>,
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    apparent_temperature: Option<f64>,
    weather_code: Option<i64>,
    wind_speed_10m: Option<f64>,
}

/// WMO weather interpretation codes.
pub fn describe_weather_code(code: i64) -> Option<&'static str> {
    let description = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => return None,
    };
    Some(description)
}

/// Open-Meteo current conditions client.
#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: api_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weather_base_url())
    }

    /// Current conditions at a point, or the fixed fallback for `city`.
    pub async fn current(&self, lat: f64, lon: f64, city: &str) -> WeatherReport {
        match self.fetch_current(lat, lon).await {
            Ok(current) => Self::report(city, current),
            Err(e) => {
                warn!(city, "weather unavailable: {}", e);
                WeatherReport::fallback(city)
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_current(&self, lat: f64, lon: f64) -> Result<Current, WidgetError> {
        let response = self
            .http
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Http { status });
        }

        let body: ForecastResponse = response.json().await?;
        body.current.ok_or(WidgetError::Empty)
    }

    fn report(city: &str, current: Current) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            temperature: current.temperature_2m.unwrap_or(FALLBACK_TEMPERATURE),
            feels_like: current.apparent_temperature.unwrap_or(FALLBACK_FEELS_LIKE),
            humidity: current.relative_humidity_2m.unwrap_or(FALLBACK_HUMIDITY),
            wind: current.wind_speed_10m.unwrap_or(FALLBACK_WIND),
            condition: current
                .weather_code
                .and_then(describe_weather_code)
                .unwrap_or("Current conditions")
                .to_string(),
            updated_at: current.time.unwrap_or_else(|| Utc::now().to_rfc3339()),
        }
    }
}
