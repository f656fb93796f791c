use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use super::{parse_endpoint, upstream_error};
use crate::domain::{
    environment::{provider::WeatherProvider, sample::ForecastEntry},
    shared::errors::DomainError,
    ward::entity::Coordinates,
};

const PROVIDER: &str = "openweathermap";

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeather {
    rain: Option<HashMap<String, f64>>,
}

impl CurrentWeather {
    /// Last-hour accumulation; absent when it has not rained.
    fn last_hour_rain(&self) -> f64 {
        self.rain
            .as_ref()
            .and_then(|rain| rain.get("1h").copied())
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    list: Vec<ForecastItem>,
    city: Option<ForecastCity>,
}

#[derive(Debug, Deserialize)]
struct ForecastCity {
    /// Shift from UTC in seconds
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: ForecastMain,
    weather: Vec<WeatherCondition>,
    rain: Option<HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    main: String,
}

impl ForecastResponse {
    /// First `limit` slots, timestamps shifted into the city's local time.
    pub(crate) fn into_entries(self, limit: usize) -> Vec<ForecastEntry> {
        let offset = self
            .city
            .and_then(|c| c.timezone)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());

        self.list
            .into_iter()
            .take(limit)
            .filter_map(|item| {
                let local = DateTime::from_timestamp(item.dt, 0)?.with_timezone(&offset);
                Some(ForecastEntry {
                    date: local.date_naive(),
                    time: local.time(),
                    rain_mm: item
                        .rain
                        .as_ref()
                        .and_then(|rain| rain.get("3h").copied())
                        .unwrap_or(0.0),
                    weather_label: item
                        .weather
                        .into_iter()
                        .next()
                        .map(|w| w.main)
                        .unwrap_or_else(|| "Unknown".to_string()),
                    temp_c: item.main.temp,
                })
            })
            .collect()
    }
}

/// Current rainfall and 5-day forecast from OpenWeatherMap.
pub struct OpenWeatherProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    forecast_limit: usize,
}

impl OpenWeatherProvider {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        forecast_limit: usize,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            forecast_limit,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        at: Coordinates,
    ) -> Result<T, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::UpstreamUnavailable(format!("{}: api key not configured", PROVIDER))
        })?;

        let mut url = parse_endpoint(&self.base_url, path)?;
        url.query_pairs_mut()
            .append_pair("lat", &at.lat.to_string())
            .append_pair("lon", &at.lon.to_string())
            .append_pair("appid", api_key)
            .append_pair("units", "metric");

        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| upstream_error(PROVIDER, e))?
            .json::<T>()
            .await
            .map_err(|e| upstream_error(PROVIDER, e))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), fields(lat = at.lat, lon = at.lon))]
    async fn fetch_rainfall(&self, at: Coordinates) -> Result<f64, DomainError> {
        let current: CurrentWeather = self.get_json("data/2.5/weather", at).await?;
        let rainfall = current.last_hour_rain();
        debug!(rainfall, "rainfall resolved");
        Ok(rainfall)
    }

    #[instrument(skip(self), fields(lat = at.lat, lon = at.lon))]
    async fn fetch_forecast(&self, at: Coordinates) -> Result<Vec<ForecastEntry>, DomainError> {
        let forecast: ForecastResponse = self.get_json("data/2.5/forecast", at).await?;
        Ok(forecast.into_entries(self.forecast_limit))
    }
}
