use axum::{Json, response::Html};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "isRunning": true }))]
pub struct HealthCheck {
    /// Shows whether server is running or not
    pub is_running: bool,
}

pub async fn index() -> Html<&'static str> {
    Html(r#"<a href="/health-check">Health</a>"#)
}

#[utoipa::path(
    get,
    path = "/health-check",
    tag = "Health Check",
    summary = "Check server's health",
    description = "Returns server's health status in JSON format",
    responses(
        (status = 200, description = "Ok, the server is running", body = HealthCheck),
    )
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck { is_running: true })
}
