use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use movies_api_core::{
    Config,
    db::{DbPool, create_pool},
    services::{GenreService, MovieService},
};

pub mod error;
pub mod middleware;
pub mod routes;

pub use error::ApiError;

use routes::{docs, genres, health, movies};

/// Shared per-process state. The store pool is created once and handed to
/// every service; nothing else is shared between requests.
pub struct AppState {
    pub pool: DbPool,
    pub genre_service: GenreService,
    pub movie_service: MovieService,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            genre_service: GenreService::new(pool.clone()),
            movie_service: MovieService::new(pool.clone()),
            pool,
        }
    }
}

/// Creates the application state with all services initialized
pub async fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connected");

    Ok(Arc::new(AppState::new(pool)))
}

/// Creates the router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health-check", get(health::health_check))
        .route("/api-docs", get(docs::serve_docs))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        // Genres
        .route("/genres", get(genres::list).post(genres::create))
        .route(
            "/genres/{id}",
            get(genres::get).put(genres::update).delete(genres::delete),
        )
        // Movies
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/genre/{genre_name}", get(movies::list_by_genre))
        .route(
            "/movies/{id}",
            get(movies::get).put(movies::update).delete(movies::delete),
        )
        .method_not_allowed_fallback(routes::not_found)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the server and blocks until shutdown
pub async fn start_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    tracing::info!("Starting Movies API server...");

    let state = create_app_state(&config).await?;
    let app = create_router(state);

    let addr = config.server_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
