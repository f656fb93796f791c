use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::domain::risk::level::{RiskLevel, UNKNOWN_RISK_COLOR};

/// WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns `true` if latitude is in [-90, 90] and longitude is in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Administrative sub-area of a city and the unit of risk assessment.
///
/// Wards are loaded from the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ward {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,

    /// Curated risk label that overrides the computed value while it rains
    pub known_risk: Option<RiskLevel>,

    pub risk_note: Option<String>,
}

impl Ward {
    /// Risk a map marker is drawn with before any assessment has run.
    pub fn marker_risk(&self) -> Option<RiskLevel> {
        self.known_risk
    }

    pub fn marker_color(&self) -> &'static str {
        self.known_risk
            .map(|risk| risk.color())
            .unwrap_or(UNKNOWN_RISK_COLOR)
    }
}
