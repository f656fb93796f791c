use async_trait::async_trait;
use lazy_static::lazy_static;

use crate::domain::{
    city::entity::{City, MapBounds},
    risk::level::RiskLevel,
    shared::errors::DomainError,
    ward::{entity::Coordinates, entity::Ward, repository::WardCatalog},
};

pub const MANGALORE: &str = "mangalore";

lazy_static! {
    static ref CITIES: Vec<City> = vec![City {
        id: MANGALORE.to_string(),
        name: "Mangalore".to_string(),
        // Balmatta
        center: Coordinates::new(12.871138, 74.846998),
        default_zoom: 15,
        bounds: MapBounds {
            south_west: Coordinates::new(12.840, 74.800),
            north_east: Coordinates::new(12.930, 74.900),
        },
    }];

    static ref MANGALORE_WARDS: Vec<Ward> = vec![
        ward(
            "pumpwell",
            "Pumpwell",
            (12.868783950805664, 74.86813354492188),
            Some(RiskLevel::Critical),
            Some("Highest waterlogging risk in Mangalore during rains"),
        ),
        ward(
            "kadri",
            "Kadri",
            (12.889729, 74.850142),
            Some(RiskLevel::High),
            Some("Frequent waterlogging issues during heavy rains"),
        ),
        ward("balmatta", "Balmatta", (12.871138, 74.846998), None, None),
        ward(
            "hampankatte",
            "Hampankatte",
            (12.9172, 74.856),
            Some(RiskLevel::Medium),
            Some("Moderate waterlogging potential"),
        ),
        ward(
            "kankanadi",
            "Kankanadi",
            (12.867463, 74.859909),
            Some(RiskLevel::Medium),
            Some("Slightly above moderate waterlogging risk"),
        ),
        ward("kulshekar", "Kulshekar", (12.8851339, 74.878575), None, None),
    ];
}

fn ward(
    id: &str,
    name: &str,
    (lat, lon): (f64, f64),
    known_risk: Option<RiskLevel>,
    risk_note: Option<&str>,
) -> Ward {
    Ward {
        id: id.to_string(),
        name: name.to_string(),
        coordinates: Coordinates::new(lat, lon),
        known_risk,
        risk_note: risk_note.map(str::to_string),
    }
}

/// Compiled-in ward registry. Only Mangalore is available.
#[derive(Debug, Default, Clone)]
pub struct StaticWardCatalog;

impl StaticWardCatalog {
    pub fn new() -> Self {
        Self
    }

    fn wards_for(city_id: &str) -> Option<&'static [Ward]> {
        if city_id.trim().eq_ignore_ascii_case(MANGALORE) {
            Some(MANGALORE_WARDS.as_slice())
        } else {
            None
        }
    }
}

#[async_trait]
impl WardCatalog for StaticWardCatalog {
    async fn list_cities(&self) -> Result<Vec<City>, DomainError> {
        Ok(CITIES.clone())
    }

    async fn find_city(&self, city_id: &str) -> Result<City, DomainError> {
        CITIES
            .iter()
            .find(|city| city.id.eq_ignore_ascii_case(city_id.trim()))
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("No ward data available for city: {}", city_id)))
    }

    async fn fetch_ward_catalog(&self, city_id: &str) -> Result<Vec<Ward>, DomainError> {
        Self::wards_for(city_id)
            .map(<[Ward]>::to_vec)
            .ok_or_else(|| DomainError::NotFound(format!("No ward data available for city: {}", city_id)))
    }

    async fn fetch_ward(&self, ward_id: &str) -> Result<Ward, DomainError> {
        MANGALORE_WARDS
            .iter()
            .find(|ward| ward.id == ward_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Ward not found: {}", ward_id)))
    }
}
