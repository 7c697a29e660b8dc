//! Open-Meteo forecast client
//!
//! Fetches the daily high/low and condition for a trip location so the
//! outfit-of-the-day screen can show "☀️ High 75°  Low 58°". Weather is
//! decoration: a failed lookup degrades to a message, never an outage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
const USER_AGENT: &str = "MyCloset/0.1.0";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No forecast available for {0}")]
    NoForecast(String),
}

/// One day's forecast as the UI consumes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub high_temp: f64,
    pub low_temp: f64,
    /// Condition name in dotted keyword form, e.g. "cloud.rain"
    pub condition_symbol: String,
    pub emoji: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<u8>,
}

/// Map a WMO weather code to a dotted condition symbol
///
/// WMO interpretation codes per the Open-Meteo docs: 0 clear, 1-2 partly
/// cloudy, 3 overcast, 45/48 fog, 51-57 drizzle, 61-67 and 80-82 rain,
/// 71-77 and 85-86 snow, 95-99 thunderstorm.
pub fn symbol_for_wmo_code(code: u8) -> &'static str {
    match code {
        0 => "sun.max",
        1 | 2 => "cloud.sun",
        3 => "cloud",
        45 | 48 => "cloud.fog",
        51..=57 => "cloud.drizzle",
        61..=67 | 80..=82 => "cloud.rain",
        71..=77 | 85 | 86 => "cloud.snow",
        95..=99 => "cloud.bolt",
        _ => "thermometer",
    }
}

/// Map a condition symbol to its display emoji
///
/// Keyword-substring rules, most specific first: a partly-cloudy symbol
/// contains both "sun" and "cloud", so "cloud.sun" must win before the
/// bare "sun" rule fires.
pub fn emoji_for_symbol(symbol: &str) -> &'static str {
    if symbol.contains("cloud.sun") {
        "⛅️"
    } else if symbol.contains("cloud.rain") || symbol.contains("cloud.drizzle") {
        "🌧️"
    } else if symbol.contains("cloud.snow") {
        "❄️"
    } else if symbol.contains("cloud.bolt") {
        "⛈️"
    } else if symbol.contains("sun") {
        "☀️"
    } else if symbol.contains("cloud") {
        "☁️"
    } else {
        "🌡️"
    }
}

/// Open-Meteo forecast API client
pub struct WeatherClient {
    http_client: reqwest::Client,
}

impl WeatherClient {
    pub fn new() -> Result<Self, WeatherError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WeatherError::NetworkError(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Fetch the daily forecast for a location and date
    pub async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        date: DateTime<Utc>,
    ) -> Result<WeatherSummary, WeatherError> {
        let day = date.date_naive().format("%Y-%m-%d").to_string();

        tracing::debug!(latitude, longitude, date = %day, "Querying forecast API");

        let response = self
            .http_client
            .get(FORECAST_BASE_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,weather_code".to_string(),
                ),
                ("temperature_unit", "fahrenheit".to_string()),
                ("start_date", day.clone()),
                ("end_date", day.clone()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WeatherError::ApiError(status.as_u16(), error_text));
        }

        let parsed: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let daily = parsed.daily.ok_or_else(|| WeatherError::NoForecast(day.clone()))?;
        let (high, low, code) = match (
            daily.temperature_2m_max.first(),
            daily.temperature_2m_min.first(),
            daily.weather_code.first(),
        ) {
            (Some(high), Some(low), Some(code)) => (*high, *low, *code),
            _ => return Err(WeatherError::NoForecast(day)),
        };

        let symbol = symbol_for_wmo_code(code);

        tracing::debug!(high, low, symbol, "Forecast retrieved");

        Ok(WeatherSummary {
            high_temp: high,
            low_temp: low,
            condition_symbol: symbol.to_string(),
            emoji: emoji_for_symbol(symbol).to_string(),
        })
    }
}
