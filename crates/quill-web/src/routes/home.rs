use axum::extract::rejection::RawFormRejection;
use axum::extract::{RawForm, State};
use axum::response::{Html, Redirect};

use quill_core::models::text_piece::NewTextPiece;

use crate::error::ApiError;
use crate::form;
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let pieces = state.store.list_all().await?;
    let page = state.pages.index(&pieces)?;
    Ok(Html(page))
}

/// Store the submitted text, then send the client back to the listing.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<RawForm, RawFormRejection>,
) -> Result<Redirect, ApiError> {
    let RawForm(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let content = form::decode_field(&body, "content")?;
    let new = NewTextPiece::from_field(content)?;

    let piece = state.store.create(new).await?;
    tracing::info!(id = piece.id, len = piece.content.len(), "text piece submitted");
    Ok(Redirect::to("/"))
}
