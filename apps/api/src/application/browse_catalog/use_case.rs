use super::dto::{LegendEntry, WardMarker};
use crate::domain::{
    city::entity::City,
    risk::level::RiskLevel,
    shared::errors::DomainError,
    ward::{entity::Ward, repository::WardCatalog, value_objects::CatalogSlug},
};
use std::sync::Arc;

pub struct BrowseCatalogUseCase {
    catalog: Arc<dyn WardCatalog>,
}

impl BrowseCatalogUseCase {
    pub fn new(catalog: Arc<dyn WardCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, DomainError> {
        self.catalog.list_cities().await
    }

    pub async fn get_city(&self, city_id: &str) -> Result<City, DomainError> {
        let slug = parse_slug(city_id)?;
        self.catalog.find_city(slug.as_str()).await
    }

    pub async fn ward_markers(&self, city_id: &str) -> Result<Vec<WardMarker>, DomainError> {
        let slug = parse_slug(city_id)?;
        let wards = self.catalog.fetch_ward_catalog(slug.as_str()).await?;
        tracing::debug!(city = %slug.as_str(), wards = wards.len(), "ward catalog loaded");
        Ok(wards.into_iter().map(WardMarker::from).collect())
    }

    pub async fn get_ward(&self, ward_id: &str) -> Result<Ward, DomainError> {
        let slug = parse_slug(ward_id)?;
        self.catalog.fetch_ward(slug.as_str()).await
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        RiskLevel::ALL
            .into_iter()
            .map(|level| LegendEntry {
                level,
                color: level.color().to_string(),
                glyph: level.glyph().to_string(),
            })
            .collect()
    }
}

fn parse_slug(raw: &str) -> Result<CatalogSlug, DomainError> {
    CatalogSlug::new(raw)
        .map_err(|_| DomainError::InvalidInput(format!("'{}' is not a valid catalog id", raw)))
}
