//! Waterlogging risk classification.
//!
//! Two pure banding functions plus the precedence rule that combines them
//! with a ward's curated risk. Nothing in here performs I/O.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::level::RiskLevel;
use crate::domain::{
    environment::sample::EnvironmentalSample, shared::errors::DomainError, ward::entity::Ward,
};

/// Elevation below which terrain counts as low-lying (meters).
pub const LOW_LYING_ELEVATION_M: f64 = 5.0;

/// Elevation from which terrain counts as raised (meters).
pub const RAISED_ELEVATION_M: f64 = 10.0;

/// Rainfall from which base risk starts to apply (mm, inclusive).
pub const SIGNIFICANT_RAINFALL_MM: f64 = 20.0;

/// Rainfall above which base risk is escalated one level (mm, exclusive).
pub const HEAVY_RAINFALL_MM: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub base_risk: RiskLevel,
    pub current_risk: RiskLevel,
}

impl RiskAssessment {
    pub const SAFE: RiskAssessment = RiskAssessment {
        base_risk: RiskLevel::Safe,
        current_risk: RiskLevel::Safe,
    };

    fn uniform(level: RiskLevel) -> Self {
        Self {
            base_risk: level,
            current_risk: level,
        }
    }
}

/// Base risk from terrain elevation alone.
///
/// Bands are half-open with the lower bound inclusive: below 5 m is `High`,
/// 5 m up to 10 m is `Medium`, 10 m and above is `Low`. Negative elevations
/// are valid below-sea-level terrain.
pub fn classify_base_risk(elevation_meters: f64) -> Result<RiskLevel, DomainError> {
    if !elevation_meters.is_finite() {
        return Err(DomainError::InvalidInput(format!(
            "elevation must be finite, got {}",
            elevation_meters
        )));
    }

    let level = if elevation_meters < LOW_LYING_ELEVATION_M {
        RiskLevel::High
    } else if elevation_meters < RAISED_ELEVATION_M {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    Ok(level)
}

/// Current risk from base risk modulated by rainfall.
///
/// Any rainfall below 20 mm collapses to `Safe` whatever the base risk. The
/// middle band includes both 20 mm and 50 mm.
pub fn classify_current_risk(
    base_risk: RiskLevel,
    rainfall_mm: f64,
) -> Result<RiskLevel, DomainError> {
    if !base_risk.is_base_level() {
        return Err(DomainError::InvalidInput(format!(
            "{} is not a base risk level",
            base_risk
        )));
    }
    validate_rainfall(rainfall_mm)?;

    let level = if rainfall_mm > HEAVY_RAINFALL_MM {
        match base_risk {
            RiskLevel::High => RiskLevel::Critical,
            RiskLevel::Medium => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    } else if rainfall_mm >= SIGNIFICANT_RAINFALL_MM {
        match base_risk {
            RiskLevel::High => RiskLevel::High,
            RiskLevel::Medium => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    } else {
        RiskLevel::Safe
    };
    Ok(level)
}

/// Combines the classifiers with the ward's curated risk.
///
/// Evaluated top-down:
/// 1. no rain at all is `Safe`/`Safe`, even for wards with a known risk;
/// 2. a known risk is reported as both base and current risk, whatever the
///    rainfall intensity;
/// 3. otherwise elevation and rainfall are classified.
pub fn resolve_assessment(
    ward: &Ward,
    sample: &EnvironmentalSample,
) -> Result<RiskAssessment, DomainError> {
    assess_sample(ward.known_risk, sample)
}

/// Same precedence as [`resolve_assessment`] for a bare curated label.
pub fn assess_sample(
    known_risk: Option<RiskLevel>,
    sample: &EnvironmentalSample,
) -> Result<RiskAssessment, DomainError> {
    validate_rainfall(sample.rainfall_mm)?;

    if sample.rainfall_mm == 0.0 {
        return Ok(RiskAssessment::SAFE);
    }

    if let Some(known) = known_risk {
        return Ok(RiskAssessment::uniform(known));
    }

    let base_risk = classify_base_risk(sample.elevation_meters)?;
    let current_risk = classify_current_risk(base_risk, sample.rainfall_mm)?;
    Ok(RiskAssessment {
        base_risk,
        current_risk,
    })
}

fn validate_rainfall(rainfall_mm: f64) -> Result<(), DomainError> {
    if !rainfall_mm.is_finite() || rainfall_mm < 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "rainfall must be a finite non-negative value, got {}",
            rainfall_mm
        )));
    }
    Ok(())
}
