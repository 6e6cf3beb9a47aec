//! Test helpers for creating in-memory test databases and fixtures

use crate::db::DbPool;
use sqlx::sqlite::SqlitePoolOptions;

/// Creates an in-memory SQLite database with all migrations applied
pub async fn create_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./src/db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Test fixtures for common test data
pub mod fixtures {
    use serde_json::{Value, json};

    /// Well-formed id that no record is ever given
    pub const ABSENT_ID: &str = "000000000000000000000000";

    pub fn movie_body() -> Value {
        json!({
            "title": "Dial M for Murder",
            "description": "A former tennis star arranges the murder of his adulterous wife",
            "release_date": "1954-05-29",
            "genre": ["653250c0b81c59abd554d463", "653250b1b81c59abd554d460"]
        })
    }
}
