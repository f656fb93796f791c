use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::domain::risk::{engine::RiskAssessment, level::RiskLevel};

/// Payload pushed to listeners whenever a session resolves a new assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskChange {
    pub session_id: Uuid,
    pub ward_id: String,
    pub rainfall_mm: f64,
    pub assessment: RiskAssessment,
}

impl RiskChange {
    pub fn current_risk(&self) -> RiskLevel {
        self.assessment.current_risk
    }
}

/// Observer of the "current displayed risk" of a session.
///
/// Called synchronously, once per resolved input change, while the session is
/// locked. Implementations must not block.
pub trait RiskListener: Send + Sync {
    fn on_risk_changed(&self, change: &RiskChange);
}

impl<F> RiskListener for F
where
    F: Fn(&RiskChange) + Send + Sync,
{
    fn on_risk_changed(&self, change: &RiskChange) {
        self(change)
    }
}
