use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub text_pieces: u64,
}

/// Liveness probe. Touches the store so a broken database shows up as a 500.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    let text_pieces = state.store.count().await?;
    Ok(Json(HealthStatus {
        status: "ok",
        text_pieces,
    }))
}
