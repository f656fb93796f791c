use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::domain::{risk::level::RiskLevel, ward::entity::Ward};

/// One map marker. Coloured by the ward's curated risk, grey when it has none.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WardMarker {
    pub ward: Ward,
    pub marker_risk: Option<RiskLevel>,
    pub color: String,
    pub glyph: String,
}

impl From<Ward> for WardMarker {
    fn from(ward: Ward) -> Self {
        let marker_risk = ward.marker_risk();
        Self {
            color: ward.marker_color().to_string(),
            glyph: marker_risk.unwrap_or(RiskLevel::Low).glyph().to_string(),
            marker_risk,
            ward,
        }
    }
}

/// Legend swatch for one risk level.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegendEntry {
    pub level: RiskLevel,
    pub color: String,
    pub glyph: String,
}
