//! Outbound clients for the environmental data providers.

pub mod open_elevation;
pub mod openweather;
pub mod simulated_history;

pub use open_elevation::OpenElevationProvider;
pub use openweather::OpenWeatherProvider;
pub use simulated_history::SimulatedHistoryProvider;

use crate::domain::shared::errors::DomainError;
use std::time::Duration;

/// Shared HTTP client for every provider.
pub fn build_client(timeout: Duration, user_agent: &str) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

pub(crate) fn parse_endpoint(base_url: &str, path: &str) -> Result<reqwest::Url, DomainError> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'));
    reqwest::Url::parse(&raw).map_err(|err| {
        tracing::warn!(url = %raw, "provider url parse failed: {}", err);
        DomainError::UpstreamUnavailable(format!("invalid provider url {}", raw))
    })
}

/// Maps a transport failure onto the domain taxonomy, logging the cause.
pub(crate) fn upstream_error(provider: &str, err: reqwest::Error) -> DomainError {
    let reason = if err.is_timeout() {
        tracing::warn!(provider, reqwest_timeout = %err);
        "request timeout"
    } else if err.is_connect() {
        tracing::warn!(provider, reqwest_connect = %err);
        "connection failed"
    } else if err.is_status() {
        tracing::info!(provider, reqwest_status = %err);
        "provider returned an error status"
    } else if err.is_decode() {
        tracing::warn!(provider, reqwest_decode = %err);
        "unexpected response body"
    } else {
        tracing::error!(provider, reqwest_error = %err);
        "provider unavailable"
    };
    DomainError::UpstreamUnavailable(format!("{}: {}", provider, reason))
}
