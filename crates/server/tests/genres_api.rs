use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use movies_api_core::{
    db::DbPool,
    test_helpers::{create_test_db, fixtures::ABSENT_ID},
};
use movies_api_server::{AppState, create_router};

async fn setup() -> (TestServer, DbPool) {
    let pool = create_test_db().await;
    let app = create_router(Arc::new(AppState::new(pool.clone())));
    (TestServer::new(app).unwrap(), pool)
}

fn assert_error(body: &Value, status: u16) {
    assert_eq!(body["error"]["statusCode"], status);
    assert!(body["error"]["message"].is_string());
}

async fn create_genre(server: &TestServer, name: &str) -> Value {
    let response = server.post("/genres").json(&json!({ "name": name })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn test_list_genres() {
    let (server, _) = setup().await;
    create_genre(&server, "mystery").await;

    let response = server.get("/genres").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let genres = body.as_array().unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0]["name"], "mystery");
    assert!(genres[0]["_id"].is_string());
}

#[tokio::test]
async fn test_create_genre_returns_record_with_id() {
    let (server, _) = setup().await;

    let body = create_genre(&server, "comedy").await;

    assert_eq!(body["name"], "comedy");
    let id = body["_id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_duplicate_genre_is_rejected() {
    let (server, _) = setup().await;
    create_genre(&server, "comedy").await;

    let response = server.post("/genres").json(&json!({ "name": "comedy" })).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_error(&body, 422);
    assert_eq!(
        body["error"]["message"],
        "comedy already exists. Genre should be unique!"
    );

    let all = server.get("/genres").await.json::<Value>();
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_genre_with_invalid_name() {
    let (server, _) = setup().await;

    for body in [
        json!({ "name": "" }),
        json!({ "name": "ab" }),
        json!({ "name": "a".repeat(26) }),
        json!({ "name": 123 }),
        json!({}),
    ] {
        let response = server.post("/genres").json(&body).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {}",
            body
        );
        assert_error(&response.json::<Value>(), 422);
    }
}

#[tokio::test]
async fn test_validation_message_has_no_quotes() {
    let (server, _) = setup().await;

    let response = server.post("/genres").json(&json!({ "name": "" })).await;

    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "name is not allowed to be empty");
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let (server, _) = setup().await;

    let response = server
        .post("/genres")
        .text("{ not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json::<Value>(), 400);
}

#[tokio::test]
async fn test_get_genre_by_id() {
    let (server, _) = setup().await;
    let created = create_genre(&server, "drama").await;
    let id = created["_id"].as_str().unwrap();

    let first = server.get(&format!("/genres/{}", id)).await;
    let second = server.get(&format!("/genres/{}", id)).await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.json::<Value>(), created);
    assert_eq!(first.json::<Value>(), second.json::<Value>());
}

#[tokio::test]
async fn test_get_absent_genre_is_not_found() {
    let (server, _) = setup().await;

    let response = server.get(&format!("/genres/{}", ABSENT_ID)).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_error(&body, 404);
    assert_eq!(
        body["error"]["message"],
        format!("Could not find a genre with {} ID", ABSENT_ID)
    );
}

#[tokio::test]
async fn test_get_malformed_genre_id_is_unprocessable() {
    let (server, _) = setup().await;

    let response = server.get("/genres/some_string").await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_error(&body, 422);
    assert!(!body["error"]["message"].as_str().unwrap().contains('"'));
}

#[tokio::test]
async fn test_update_genre() {
    let (server, _) = setup().await;
    let created = create_genre(&server, "crime").await;
    let id = created["_id"].as_str().unwrap();

    let response = server
        .put(&format!("/genres/{}", id))
        .json(&json!({ "name": "true crime" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "_id": id, "name": "true crime" })
    );
}

#[tokio::test]
async fn test_update_genre_with_empty_name_leaves_record_unchanged() {
    let (server, _) = setup().await;
    let created = create_genre(&server, "horror").await;
    let id = created["_id"].as_str().unwrap();

    let response = server
        .put(&format!("/genres/{}", id))
        .json(&json!({ "name": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let current = server.get(&format!("/genres/{}", id)).await.json::<Value>();
    assert_eq!(current, created);
}

#[tokio::test]
async fn test_update_genre_keeping_its_own_name_is_rejected() {
    // The uniqueness check does not exempt the record being updated
    let (server, _) = setup().await;
    let created = create_genre(&server, "noir").await;
    let id = created["_id"].as_str().unwrap();

    let response = server
        .put(&format!("/genres/{}", id))
        .json(&json!({ "name": "noir" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&response.json::<Value>(), 422);
}

#[tokio::test]
async fn test_update_absent_genre_is_not_found() {
    let (server, _) = setup().await;

    let response = server
        .put(&format!("/genres/{}", ABSENT_ID))
        .json(&json!({ "name": "western" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_genre() {
    let (server, _) = setup().await;
    let created = create_genre(&server, "romance").await;
    let id = created["_id"].as_str().unwrap();

    let response = server.delete(&format!("/genres/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), created);

    let again = server.delete(&format!("/genres/{}", id)).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);

    let malformed = server.delete("/genres/123").await;
    assert_eq!(malformed.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let (server, pool) = setup().await;
    pool.close().await;

    let response = server.get("/genres").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!({ "error": { "statusCode": 500, "message": "Internal Server Error" } })
    );
}

#[tokio::test]
async fn test_store_failure_during_uniqueness_check_is_internal_error() {
    let (server, pool) = setup().await;
    pool.close().await;

    let response = server.post("/genres").json(&json!({ "name": "history" })).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
