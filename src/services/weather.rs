// src/services/weather.rs
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::RelayConfig, error::AppError, message::WeatherQuery, services::upstream::send_json,
};

/// Current conditions for a coordinate, returned exactly as the provider sent them.
pub async fn fetch_weather(
    http: &Client,
    config: &RelayConfig,
    query: WeatherQuery,
) -> Result<Value, AppError> {
    let lat = query.lat.to_string();
    let lon = query.lng.to_string();

    let request = http
        .get(config.weather_url())
        .query(&[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", config.weather_api_key.as_str()),
            ("units", "metric"),
        ])
        .timeout(config.weather_timeout);

    send_json(request).await
}
