use std::sync::Arc;

use quill_storage::store::TextPieceStore;

use crate::render::Pages;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: TextPieceStore,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(store: TextPieceStore) -> Result<Self, tera::Error> {
        Ok(Self {
            store,
            pages: Arc::new(Pages::new()?),
        })
    }
}
