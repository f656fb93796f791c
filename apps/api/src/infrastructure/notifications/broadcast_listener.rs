use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::domain::{
    risk::level::RiskLevel,
    session::listener::{RiskChange, RiskListener},
};

#[derive(Serialize)]
struct FeedMessage<'a> {
    r#type: &'static str,
    session_id: String,
    ward_id: &'a str,
    rainfall_mm: f64,
    base_risk: RiskLevel,
    current_risk: RiskLevel,
    color: &'static str,
}

/// Forwards risk changes as JSON text to the live feed.
pub struct BroadcastRiskListener {
    sender: Arc<broadcast::Sender<String>>,
}

impl BroadcastRiskListener {
    pub fn new(sender: Arc<broadcast::Sender<String>>) -> Self {
        Self { sender }
    }
}

impl RiskListener for BroadcastRiskListener {
    fn on_risk_changed(&self, change: &RiskChange) {
        let message = FeedMessage {
            r#type: "risk_changed",
            session_id: change.session_id.to_string(),
            ward_id: &change.ward_id,
            rainfall_mm: change.rainfall_mm,
            base_risk: change.assessment.base_risk,
            current_risk: change.current_risk(),
            color: change.current_risk().color(),
        };
        match serde_json::to_string(&message) {
            // No subscribers is not an error
            Ok(payload) => {
                let _ = self.sender.send(payload);
            }
            Err(err) => tracing::warn!("risk feed encode failed: {}", err),
        }
    }
}
