use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    application::browse_catalog::dto::{LegendEntry, WardMarker},
    domain::city::entity::City,
    presentation::http::{errors::AppError, state::AppState},
};

pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<City>>, AppError> {
    Ok(Json(state.catalog.list_cities().await?))
}

pub async fn get_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<City>, AppError> {
    Ok(Json(state.catalog.get_city(&city_id).await?))
}

/// Map markers for every ward of the city, coloured by curated risk.
pub async fn list_ward_markers(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<WardMarker>>, AppError> {
    Ok(Json(state.catalog.ward_markers(&city_id).await?))
}

pub async fn get_legend(State(state): State<AppState>) -> Json<Vec<LegendEntry>> {
    Json(state.catalog.legend())
}
