#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use zoo::{AppState, Config};

/// Creates an AppState for the tests
///
/// # Arguments
/// * `pool` - SQLite pool prepared by `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    let config = Config {
        seed_data: false,
        ..Config::default()
    };
    Arc::new(AppState::new(pool, config))
}

/// Creates a TestServer running the full router
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = zoo::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Shorthand for a server over a fresh state
pub fn server_for(pool: SqlitePool) -> TestServer {
    create_test_server(create_test_state(pool))
}

/// The `detail` message of a 404 for a missing or deleted row
pub fn not_found_detail(kind: &str, id: i64) -> serde_json::Value {
    serde_json::json!({
        "detail": format!("Error: `{kind}` data not found or deleted - ID: {id}")
    })
}
