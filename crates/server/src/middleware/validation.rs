use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use movies_api_core::{
    Error,
    validation::{Schema, validate},
};

use crate::{AppState, error::ApiError};

/// JSON body that passed the validation pipeline for schema `T`.
///
/// Bodies that are not JSON are rejected with the status the JSON
/// extractor reports; every other failure is a validation failure.
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<Arc<AppState>> for ValidatedJson<T>
where
    T: Schema + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| Error::domain(rejection.status().as_u16(), rejection.body_text()))?;

        let input = validate::<T>(&state.pool, payload).await?;
        Ok(Self(input))
    }
}
