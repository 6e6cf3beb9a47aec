use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use movies_api_core::error::{Error, ErrorBody, normalize};

/// Wire shape of every failure response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Unified API error type for consistent error responses.
///
/// Only ever built through [`normalize`], so every failure path answers
/// with the same `{"error": {"statusCode", "message"}}` shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.body })).into_response()
    }
}

/// Convert from core service errors to API errors
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let mut body = normalize(&err);
        let status =
            StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        body.status_code = status.as_u16();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", err);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, body.message);
        }

        Self { status, body }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
