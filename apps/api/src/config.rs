//! Application configuration loading from environment variables.
//!
//! All configuration is read from the environment at startup (a `.env` file is
//! honoured via `dotenvy`). Every variable is optional.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,waterlog_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `OPENWEATHER_API_KEY`: OpenWeatherMap key; without it rainfall lookups fail
//! - `OPENWEATHER_BASE_URL`: (default: "https://api.openweathermap.org")
//! - `ELEVATION_BASE_URL`: Open-Elevation compatible API (default: "https://api.open-elevation.com")
//! - `PROVIDER_TIMEOUT_SECONDS`: Outbound request timeout (default: 12)
//! - `PROVIDER_USER_AGENT`: User agent sent to providers
//! - `FORECAST_LIMIT`: Forecast slots kept per lookup (default: 40)
//! - `HISTORY_DAYS`: Simulated history length in days (default: 5)
//! - `SESSION_CAPACITY`: Dashboard sessions kept in memory (default: 1024)
//! - `ALLOWED_ORIGINS`: Comma separated CORS origins; empty allows any origin

use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    pub openweather_api_key: Option<String>,

    pub openweather_base_url: String,

    pub elevation_base_url: String,

    /// Timeout for every outbound provider request
    pub provider_timeout_seconds: u64,

    pub provider_user_agent: String,

    /// Number of 3-hour forecast slots kept (40 = five days)
    pub forecast_limit: usize,

    pub history_days: u32,

    /// Oldest sessions are evicted beyond this count
    pub session_capacity: usize,

    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            openweather_api_key: None,
            openweather_base_url: "https://api.openweathermap.org".to_string(),
            elevation_base_url: "https://api.open-elevation.com".to_string(),
            provider_timeout_seconds: 12,
            provider_user_agent: default_user_agent(),
            forecast_limit: 40,
            history_days: 5,
            session_capacity: 1024,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            openweather_base_url: env_or("OPENWEATHER_BASE_URL", defaults.openweather_base_url)?,
            elevation_base_url: env_or("ELEVATION_BASE_URL", defaults.elevation_base_url)?,
            provider_timeout_seconds: env_or(
                "PROVIDER_TIMEOUT_SECONDS",
                defaults.provider_timeout_seconds,
            )?,
            provider_user_agent: env_or("PROVIDER_USER_AGENT", defaults.provider_user_agent)?,
            forecast_limit: env_or("FORECAST_LIMIT", defaults.forecast_limit)?,
            history_days: env_or("HISTORY_DAYS", defaults.history_days)?,
            session_capacity: env_or("SESSION_CAPACITY", defaults.session_capacity)?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or_default(),
        })
    }
}

fn default_user_agent() -> String {
    format!("waterlog-api/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
