use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{parse_endpoint, upstream_error};
use crate::domain::{
    environment::provider::ElevationProvider, shared::errors::DomainError,
    ward::entity::Coordinates,
};

const PROVIDER: &str = "open-elevation";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

/// Elevation lookups against an Open-Elevation compatible API.
pub struct OpenElevationProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenElevationProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ElevationProvider for OpenElevationProvider {
    #[instrument(skip(self), fields(lat = at.lat, lon = at.lon))]
    async fn fetch_elevation(&self, at: Coordinates) -> Result<f64, DomainError> {
        let mut url = parse_endpoint(&self.base_url, "api/v1/lookup")?;
        url.query_pairs_mut()
            .append_pair("locations", &format!("{},{}", at.lat, at.lon));

        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| upstream_error(PROVIDER, e))?
            .json::<LookupResponse>()
            .await
            .map_err(|e| upstream_error(PROVIDER, e))?;

        let elevation = body
            .results
            .first()
            .map(|r| r.elevation)
            .ok_or_else(|| {
                DomainError::UpstreamUnavailable(format!("{}: empty lookup result", PROVIDER))
            })?;
        debug!(elevation, "elevation resolved");
        Ok(elevation)
    }
}
