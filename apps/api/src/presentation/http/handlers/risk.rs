use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        environment::sample::EnvironmentalSample,
        risk::{
            engine::{RiskAssessment, assess_sample},
            level::{RiskInterpretation, RiskLevel},
        },
    },
    presentation::http::errors::AppError,
};

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub elevation: f64,
    pub rainfall: f64,
    pub known_risk: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub color: &'static str,
    pub interpretation: RiskInterpretation,
}

/// Stateless assessment of an arbitrary elevation and rainfall pair.
pub async fn classify(Query(query): Query<ClassifyQuery>) -> Result<Json<ClassifyResponse>, AppError> {
    let known_risk = query
        .known_risk
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<RiskLevel>)
        .transpose()?;

    let sample = EnvironmentalSample::new(query.elevation, query.rainfall);
    let assessment = assess_sample(known_risk, &sample)?;

    Ok(Json(ClassifyResponse {
        assessment,
        color: assessment.current_risk.color(),
        interpretation: RiskInterpretation::describe(assessment.current_risk, query.rainfall),
    }))
}
