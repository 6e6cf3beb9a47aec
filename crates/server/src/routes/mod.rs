pub mod docs;
pub mod genres;
pub mod health;
pub mod movies;

use movies_api_core::Error;

use crate::error::ApiError;

/// Fallback for unknown paths and unsupported methods
pub async fn not_found() -> ApiError {
    Error::not_found("Not Found").into()
}
