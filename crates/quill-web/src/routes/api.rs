use axum::extract::State;
use axum::Json;

use quill_core::models::text_piece::TextPiece;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_text_pieces(
    State(state): State<AppState>,
) -> Result<Json<Vec<TextPiece>>, ApiError> {
    let pieces = state.store.list_all().await?;
    Ok(Json(pieces))
}
