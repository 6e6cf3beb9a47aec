use axum::{Json, response::Html};
use utoipa::OpenApi;

use movies_api_core::{
    error::ErrorBody,
    models::{Genre, GenreInput, Movie, MovieInput},
};

use crate::{
    error::ErrorResponse,
    routes::{genres, health, movies},
};

/// OpenAPI document for the whole HTTP surface
#[derive(OpenApi)]
#[openapi(
    info(title = "Movies API", version = "1.0.0"),
    paths(
        health::health_check,
        genres::list,
        genres::create,
        genres::get,
        genres::update,
        genres::delete,
        movies::list,
        movies::create,
        movies::list_by_genre,
        movies::get,
        movies::update,
        movies::delete,
    ),
    components(schemas(
        health::HealthCheck,
        Genre,
        GenreInput,
        Movie,
        MovieInput,
        ErrorBody,
        ErrorResponse,
    )),
    tags(
        (name = "Health Check", description = "Server status"),
        (name = "Genres", description = "Genre management"),
        (name = "Movies", description = "Movie management"),
    )
)]
pub struct ApiDoc;

const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Movies API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn serve_docs() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_path() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/health-check",
            "/genres",
            "/genres/{id}",
            "/movies",
            "/movies/genre/{genre_name}",
            "/movies/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert!(paths["/genres/{id}"]["delete"].is_object());
    }

    #[test]
    fn test_openapi_registers_body_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = doc["components"]["schemas"].as_object().unwrap();

        for name in ["Genre", "GenreBody", "Movie", "MovieBody", "HealthCheck", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
        assert!(schemas["Genre"]["properties"]["_id"].is_object());
    }

    #[test]
    fn test_docs_page_mounts_swagger_ui() {
        assert!(SWAGGER_UI.starts_with("<!DOCTYPE html>"));
        assert!(SWAGGER_UI.contains(r##"dom_id: "#swagger-ui""##));
        assert!(SWAGGER_UI.trim_end().ends_with("</html>"));
    }
}
