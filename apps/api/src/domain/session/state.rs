use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::listener::{RiskChange, RiskListener};
use crate::domain::{
    environment::sample::EnvironmentalSample,
    risk::{
        engine::{RiskAssessment, resolve_assessment},
        level::RiskLevel,
    },
    shared::errors::DomainError,
    ward::entity::Ward,
};

/// Handle for one in-flight ward selection.
///
/// Only the ticket handed out last can complete; earlier ones are discarded
/// when their data arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    sequence: u64,
    ward_id: String,
}

impl SelectionTicket {
    pub fn ward_id(&self) -> &str {
        &self.ward_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Applied(RiskAssessment),
    Superseded,
}

/// Read-only view of a session for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub selected_ward_id: Option<String>,
    pub current_displayed_risk: RiskLevel,
    pub ward: Option<Ward>,
    pub sample: Option<EnvironmentalSample>,
    pub assessment: Option<RiskAssessment>,
    pub pending: bool,
    pub last_error: Option<String>,
}

/// Selection state of one dashboard.
///
/// The assessment is recomputed at exactly two points: when a ward selection
/// resolves and when the simulated rainfall changes. Each recompute notifies
/// every listener once with the new current risk.
pub struct SelectionState {
    id: Uuid,
    selected_ward_id: Option<String>,
    current_displayed_risk: RiskLevel,
    ward: Option<Ward>,
    sample: Option<EnvironmentalSample>,
    assessment: Option<RiskAssessment>,
    last_error: Option<String>,
    latest_sequence: u64,
    pending: bool,
    listeners: Vec<Arc<dyn RiskListener>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Uuid::now_v7())
    }
}

impl SelectionState {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            selected_ward_id: None,
            current_displayed_risk: RiskLevel::Safe,
            ward: None,
            sample: None,
            assessment: None,
            last_error: None,
            latest_sequence: 0,
            pending: false,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn selected_ward_id(&self) -> Option<&str> {
        self.selected_ward_id.as_deref()
    }

    pub fn current_displayed_risk(&self) -> RiskLevel {
        self.current_displayed_risk
    }

    pub fn ward(&self) -> Option<&Ward> {
        self.ward.as_ref()
    }

    pub fn sample(&self) -> Option<&EnvironmentalSample> {
        self.sample.as_ref()
    }

    pub fn assessment(&self) -> Option<&RiskAssessment> {
        self.assessment.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn RiskListener>) {
        self.listeners.push(listener);
    }

    /// Marks `ward_id` as selected and supersedes any earlier in-flight selection.
    pub fn begin_selection(&mut self, ward_id: &str) -> SelectionTicket {
        self.latest_sequence += 1;
        self.selected_ward_id = Some(ward_id.to_string());
        self.pending = true;
        SelectionTicket {
            sequence: self.latest_sequence,
            ward_id: ward_id.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.sequence == self.latest_sequence
    }

    /// Applies the fetched ward data if `ticket` is still the latest selection.
    ///
    /// On an engine rejection the displayed risk, cached ward data and
    /// assessment keep their previous values; the selection stops pending,
    /// the error is recorded as `last_error` and returned to the caller.
    pub fn complete_selection(
        &mut self,
        ticket: &SelectionTicket,
        ward: Ward,
        sample: EnvironmentalSample,
    ) -> Result<SelectionOutcome, DomainError> {
        if !self.is_current(ticket) {
            tracing::debug!(
                session = %self.id,
                ward = %ticket.ward_id,
                "discarding superseded selection"
            );
            return Ok(SelectionOutcome::Superseded);
        }

        self.pending = false;
        let assessment = match resolve_assessment(&ward, &sample) {
            Ok(assessment) => assessment,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };
        self.apply(ward, sample, assessment);
        Ok(SelectionOutcome::Applied(assessment))
    }

    /// Records a failed fetch for `ticket`. The displayed risk is left as is.
    ///
    /// Returns `false` when the ticket was already superseded.
    pub fn fail_selection(&mut self, ticket: &SelectionTicket, err: &DomainError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = false;
        self.last_error = Some(err.to_string());
        true
    }

    /// Re-resolves the selected ward with new rainfall and the cached elevation.
    pub fn simulate_rainfall(&mut self, rainfall_mm: f64) -> Result<RiskAssessment, DomainError> {
        let (Some(ward), Some(sample)) = (self.ward.as_ref(), self.sample) else {
            return Err(DomainError::InvalidInput(
                "no ward has been resolved for this session".into(),
            ));
        };

        let sample = sample.with_rainfall(rainfall_mm);
        let assessment = resolve_assessment(ward, &sample)?;
        let ward = ward.clone();
        self.apply(ward, sample, assessment);
        Ok(assessment)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            selected_ward_id: self.selected_ward_id.clone(),
            current_displayed_risk: self.current_displayed_risk,
            ward: self.ward.clone(),
            sample: self.sample,
            assessment: self.assessment,
            pending: self.pending,
            last_error: self.last_error.clone(),
        }
    }

    fn apply(&mut self, ward: Ward, sample: EnvironmentalSample, assessment: RiskAssessment) {
        let change = RiskChange {
            session_id: self.id,
            ward_id: ward.id.clone(),
            rainfall_mm: sample.rainfall_mm,
            assessment,
        };

        self.ward = Some(ward);
        self.sample = Some(sample);
        self.assessment = Some(assessment);
        self.current_displayed_risk = assessment.current_risk;
        self.last_error = None;

        for listener in &self.listeners {
            listener.on_risk_changed(&change);
        }
    }
}
