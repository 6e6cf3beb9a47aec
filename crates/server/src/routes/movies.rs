use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use movies_api_core::models::{Movie, MovieInput};

use crate::{
    AppState,
    error::{ApiResult, ErrorResponse},
    middleware::{path::ApiPath, validation::ValidatedJson},
};

#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    summary = "Get all movies",
    responses(
        (status = 200, description = "List of movies", body = [Movie]),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let movies = state.movie_service.list().await?;
    Ok((StatusCode::OK, Json(movies)))
}

#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    summary = "Create a movie",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Created movie", body = Movie),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> ApiResult<impl IntoResponse> {
    let movie = state.movie_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

#[utoipa::path(
    get,
    path = "/movies/genre/{genre_name}",
    tag = "Movies",
    summary = "Get movies by genre name",
    params(("genre_name" = String, Path, description = "Exact genre name")),
    responses(
        (status = 200, description = "Movies of the genre, possibly none", body = [Movie]),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn list_by_genre(
    State(state): State<Arc<AppState>>,
    ApiPath(genre_name): ApiPath<String>,
) -> ApiResult<impl IntoResponse> {
    let movies = state.movie_service.list_by_genre_name(&genre_name).await?;
    Ok((StatusCode::OK, Json(movies)))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Get a movie by id",
    params(("id" = String, Path, description = "Movie id (24 hex characters)")),
    responses(
        (status = 200, description = "Found movie", body = Movie),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<impl IntoResponse> {
    let movie = state.movie_service.get_by_id(&id).await?;
    Ok((StatusCode::OK, Json(movie)))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Update a movie",
    params(("id" = String, Path, description = "Movie id (24 hex characters)")),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> ApiResult<impl IntoResponse> {
    let movie = state.movie_service.update(&id, input).await?;
    Ok((StatusCode::OK, Json(movie)))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Delete a movie",
    params(("id" = String, Path, description = "Movie id (24 hex characters)")),
    responses(
        (status = 200, description = "Deleted movie", body = Movie),
        (status = 404, description = "Not Found", body = ErrorResponse),
        (status = 422, description = "Unprocessable Entity", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<impl IntoResponse> {
    let movie = state.movie_service.delete(&id).await?;
    Ok((StatusCode::OK, Json(movie)))
}
