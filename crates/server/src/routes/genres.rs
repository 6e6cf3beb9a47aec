use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use movies_api_core::models::{Genre, GenreInput};

use crate::{
    AppState,
    error::{ApiResult, ErrorResponse},
    middleware::{path::ApiPath, validation::ValidatedJson},
};

#[utoipa::path(
    get,
    path = "/genres",
    tag = "Genres",
    summary = "Get all genres",
    responses(
        (status = 200, description = "List of genres", body = [Genre]),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let genres = state.genre_service.list().await?;
    Ok((StatusCode::OK, Json(genres)))
}

#[utoipa::path(
    post,
    path = "/genres",
    tag = "Genres",
    summary = "Create a genre",
    request_body = GenreInput,
    responses(
        (status = 201, description = "Created genre", body = Genre),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<GenreInput>,
) -> ApiResult<impl IntoResponse> {
    let genre = state.genre_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "Genres",
    summary = "Get a genre by id",
    params(("id" = String, Path, description = "Genre id (24 hex characters)")),
    responses(
        (status = 200, description = "Found genre", body = Genre),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<impl IntoResponse> {
    let genre = state.genre_service.get_by_id(&id).await?;
    Ok((StatusCode::OK, Json(genre)))
}

#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "Genres",
    summary = "Update a genre",
    params(("id" = String, Path, description = "Genre id (24 hex characters)")),
    request_body = GenreInput,
    responses(
        (status = 200, description = "Updated genre", body = Genre),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
    ValidatedJson(input): ValidatedJson<GenreInput>,
) -> ApiResult<impl IntoResponse> {
    let genre = state.genre_service.update(&id, input).await?;
    Ok((StatusCode::OK, Json(genre)))
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "Genres",
    summary = "Delete a genre",
    params(("id" = String, Path, description = "Genre id (24 hex characters)")),
    responses(
        (status = 200, description = "Deleted genre", body = Genre),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<impl IntoResponse> {
    let genre = state.genre_service.delete(&id).await?;
    Ok((StatusCode::OK, Json(genre)))
}
