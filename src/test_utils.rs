//! Shared test utilities.
//!
//! Helpers for setting up an in-memory store, creating records with
//! sensible defaults, and driving the router without a network listener.

#![allow(clippy::expect_used)]

use crate::{
    api::{self, AppState},
    config::ServerSettings,
    core::{budget, category, transaction},
    entities,
    errors::Result,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a category with the default color.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string(), None).await
}

/// Creates an uncategorized transaction at the given ISO 8601 date.
pub async fn create_dated_transaction(
    db: &DatabaseConnection,
    amount: f64,
    kind: &str,
    date: &str,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(db, amount, kind, None, None, Some(date)).await
}

/// Creates an expense in `category_id` at the given ISO 8601 date.
pub async fn create_categorized_transaction(
    db: &DatabaseConnection,
    amount: f64,
    category_id: &str,
    date: &str,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(
        db,
        amount,
        "expense",
        Some(category_id.to_string()),
        None,
        Some(date),
    )
    .await
}

/// Creates a budget for `month`.
pub async fn create_test_budget(
    db: &DatabaseConnection,
    month: &str,
    category_id: Option<&str>,
    limit: f64,
) -> Result<entities::budget::Model> {
    budget::create_budget(
        db,
        month.to_string(),
        category_id.map(ToString::to_string),
        limit,
    )
    .await
}

/// Builds the full router over a fresh in-memory store.
/// Returns the store too so tests can seed records directly.
pub async fn test_app() -> Result<(Router, Arc<DatabaseConnection>)> {
    let state = AppState::new(setup_test_db().await?);
    let db = Arc::clone(&state.db);
    let app = api::router(state, &ServerSettings::default());
    Ok((app, db))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router never fails");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}

/// Sends `GET uri` and returns the status with the parsed JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

/// Sends `POST uri` with a JSON body and returns the status with the parsed JSON body.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}
