use super::entity::Ward;
use crate::domain::{city::entity::City, shared::errors::DomainError};
use async_trait::async_trait;

/// Static registry of cities and their wards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WardCatalog: Send + Sync {
    async fn list_cities(&self) -> Result<Vec<City>, DomainError>;

    /// Fails with `NotFound` for an unrecognised city id.
    async fn find_city(&self, city_id: &str) -> Result<City, DomainError>;

    /// Fails with `NotFound` for an unrecognised city id.
    async fn fetch_ward_catalog(&self, city_id: &str) -> Result<Vec<Ward>, DomainError>;

    /// Fails with `NotFound` for an unknown ward id.
    async fn fetch_ward(&self, ward_id: &str) -> Result<Ward, DomainError>;
}
