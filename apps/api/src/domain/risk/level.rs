use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::domain::shared::errors::DomainError;

/// Marker colour used for wards that carry no curated risk label.
pub const UNKNOWN_RISK_COLOR: &str = "#888888";

/// Ordinal waterlogging severity.
///
/// Variants are declared from least to most severe, so the derived `Ord`
/// is the severity order every classification rule has to respect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskLevel {
    /// No waterlogging expected
    #[default]
    Safe,

    /// Minimal concern
    Low,

    /// Moderate potential, stay alert
    Medium,

    /// Prepare for waterlogging
    High,

    /// Immediate action required
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Safe,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Hex colour used for markers, legend swatches and risk labels.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "#d62728",
            RiskLevel::High => "#ff7f0e",
            RiskLevel::Medium => "#ffdd57",
            RiskLevel::Low | RiskLevel::Safe => "#2ca02c",
        }
    }

    /// Single-character glyph drawn inside a map marker.
    pub fn glyph(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "!",
            RiskLevel::High => "▲",
            RiskLevel::Medium => "●",
            RiskLevel::Low | RiskLevel::Safe => "○",
        }
    }

    /// Whether the level can come out of elevation banding alone.
    pub fn is_base_level(&self) -> bool {
        matches!(self, RiskLevel::Low | RiskLevel::Medium | RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown risk level '{}'", s)))
    }
}

/// Headline and advice shown under an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskInterpretation {
    pub headline: String,
    pub advice: String,
}

impl RiskInterpretation {
    /// Interpretation for a resolved current risk at the given rainfall.
    pub fn describe(current: RiskLevel, rainfall_mm: f64) -> Self {
        let (headline, advice) = match current {
            RiskLevel::Safe if rainfall_mm == 0.0 => (
                "No Current Risk",
                "No rainfall detected. Ward vulnerabilities only apply during rain.",
            ),
            RiskLevel::Safe => ("Safe", "Rainfall is below the waterlogging threshold."),
            RiskLevel::Low => ("Low Risk", "Minimal waterlogging concerns."),
            RiskLevel::Medium => ("Medium Risk", "Moderate waterlogging potential. Stay alert."),
            RiskLevel::High => (
                "High Risk",
                "Prepare for potential waterlogging. Monitor weather closely.",
            ),
            RiskLevel::Critical => (
                "Critical Risk",
                "Immediate action required. High chance of waterlogging.",
            ),
        };
        Self {
            headline: headline.to_string(),
            advice: advice.to_string(),
        }
    }
}
