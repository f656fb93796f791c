use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    domain::ward::entity::Ward,
    presentation::http::{errors::AppError, state::AppState},
};

pub async fn get_ward(
    State(state): State<AppState>,
    Path(ward_id): Path<String>,
) -> Result<Json<Ward>, AppError> {
    Ok(Json(state.catalog.get_ward(&ward_id).await?))
}
