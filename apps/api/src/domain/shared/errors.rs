use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl DomainError {
    /// Whether the error came from an external data provider rather than the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(self, DomainError::UpstreamUnavailable(_))
    }
}
