use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::assess_ward::dto::{
        AssessmentResponse, SelectWardRequest, SelectionResponse, SimulateRainfallRequest,
    },
    domain::session::state::SessionSnapshot,
    infrastructure::session::SharedSession,
    presentation::http::{errors::AppError, state::AppState},
};

fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid session id: {}", raw)))
}

async fn find_session(state: &AppState, raw_id: &str) -> Result<SharedSession, AppError> {
    let id = parse_session_id(raw_id)?;
    Ok(state.sessions.get(id).await?)
}

pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let (_, session) = state.sessions.create().await;
    let snapshot = session.lock().await.snapshot();
    (StatusCode::CREATED, Json(snapshot))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = find_session(&state, &id).await?;
    let snapshot = session.lock().await.snapshot();
    Ok(Json(snapshot))
}

/// Selects a ward and waits for its assessment.
///
/// Answers `{"status": "superseded"}` when another selection on the same
/// session overtook this one.
pub async fn select_ward(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectWardRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let req = req.normalized();
    req.validate()?;
    let session = find_session(&state, &id).await?;
    let response = state.assessments.select_ward(&session, &req.ward_id).await?;
    Ok(Json(response))
}

pub async fn simulate_rainfall(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SimulateRainfallRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    req.validate()?;
    let session = find_session(&state, &id).await?;
    let response = state
        .assessments
        .simulate_rainfall(&session, req.rainfall_mm)
        .await?;
    Ok(Json(response))
}
