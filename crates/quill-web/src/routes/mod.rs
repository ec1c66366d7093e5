pub mod api;
pub mod health;
pub mod home;

use crate::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
