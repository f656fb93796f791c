use super::sample::{ForecastEntry, HistoricalEntry};
use crate::domain::{shared::errors::DomainError, ward::entity::Coordinates};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ElevationProvider: Send + Sync {
    /// Terrain elevation in meters.
    async fn fetch_elevation(&self, at: Coordinates) -> Result<f64, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Last-hour rainfall accumulation in mm, 0 when none is reported.
    async fn fetch_rainfall(&self, at: Coordinates) -> Result<f64, DomainError>;

    /// Upcoming 3-hour slots, display only.
    async fn fetch_forecast(&self, at: Coordinates) -> Result<Vec<ForecastEntry>, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Most recent day first, display only.
    async fn fetch_historical(&self, at: Coordinates)
    -> Result<Vec<HistoricalEntry>, DomainError>;
}
