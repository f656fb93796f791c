use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct ProviderStatus {
    elevation_base_url: String,
    openweather_base_url: String,
    /// Rainfall lookups fail with 503 while this is false
    openweather_key_configured: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    sessions: usize,
    providers: ProviderStatus,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;
    Json(HealthResponse {
        status: "healthy",
        sessions: state.sessions.len().await,
        providers: ProviderStatus {
            elevation_base_url: config.elevation_base_url.clone(),
            openweather_base_url: config.openweather_base_url.clone(),
            openweather_key_configured: config.openweather_api_key.is_some(),
        },
        version: env!("CARGO_PKG_VERSION"),
    })
}
