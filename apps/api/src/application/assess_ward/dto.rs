use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    environment::sample::{EnvironmentalSample, ForecastEntry, HistoricalEntry},
    risk::{engine::RiskAssessment, level::RiskInterpretation},
    ward::{entity::Ward, value_objects::WARD_ID_REGEX},
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct SelectWardRequest {
    #[validate(regex(path = *WARD_ID_REGEX, message = "ward_id must be a catalog slug"))]
    pub ward_id: String,
}

impl SelectWardRequest {
    /// Ward ids are matched in lowercase, as in catalog lookups.
    pub fn normalized(self) -> Self {
        Self {
            ward_id: self.ward_id.trim().to_lowercase(),
        }
    }
}

/// Position of the rainfall simulation slider.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct SimulateRainfallRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "rainfall_mm must be between 0 and 100"))]
    pub rainfall_mm: f64,
}

/// Everything the detail panel renders for a freshly selected ward.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WardDetailResponse {
    pub session_id: Uuid,
    pub ward: Ward,
    pub actual_rainfall_mm: f64,
    pub sample: EnvironmentalSample,
    pub assessment: RiskAssessment,
    pub interpretation: RiskInterpretation,
    pub forecast: Vec<ForecastEntry>,
    pub history: Vec<HistoricalEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum SelectionResponse {
    Applied(WardDetailResponse),
    /// A newer selection was made while this one was loading
    Superseded { session_id: Uuid, ward_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResponse {
    pub session_id: Uuid,
    pub ward_id: String,
    pub sample: EnvironmentalSample,
    pub assessment: RiskAssessment,
    pub interpretation: RiskInterpretation,
}
