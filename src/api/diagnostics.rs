//! Informational endpoints: `/`, `/api/hello`, `/test` and `/schema`.
//!
//! `/test` never fails the request; store problems are reported as text.

use crate::{
    api::{
        AppState, budgets::CreateBudget, categories::CreateCategory,
        transactions::CreateTransaction,
    },
    core::status::collection_counts,
};
use axum::{Json, extract::State};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{instrument, warn};
use utoipa::{
    ToSchema,
    openapi::{RefOr, schema::Schema},
};

/// Longest error excerpt included in the status report.
const ERROR_EXCERPT_CHARS: usize = 50;
/// Most collections listed in the status report.
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Simple `{message}` body
#[derive(Debug, Serialize)]
pub struct Message {
    /// Human-readable text
    pub message: &'static str,
}

/// One collection in the status report
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CollectionStatus {
    /// Collection name
    pub name: &'static str,
    /// Number of stored records
    pub documents: u64,
}

/// Body of `GET /test`
#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    /// Always "Running" when the handler answers
    pub backend: &'static str,
    /// Store state in words
    pub database: String,
    /// Whether `DATABASE_URL` is set
    pub database_url: &'static str,
    /// Whether `DATABASE_NAME` is set
    pub database_name: &'static str,
    /// "Connected" or "Not Connected"
    pub connection_status: &'static str,
    /// Collections with their record counts
    pub collections: Vec<CollectionStatus>,
}

fn env_flag(key: &str) -> &'static str {
    if std::env::var_os(key).is_some() {
        "Set"
    } else {
        "Not Set"
    }
}

/// `GET /`
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Budgeting API is running",
    })
}

/// `GET /api/hello`
pub async fn hello() -> Json<Message> {
    Json(Message {
        message: "Hello from the backend API!",
    })
}

/// `GET /test` - reports whether the store is reachable and what it holds.
#[instrument(skip_all)]
pub async fn test_database(State(state): State<AppState>) -> Json<DatabaseStatus> {
    let mut status = DatabaseStatus {
        backend: "Running",
        database: "Not Available".to_string(),
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    match collection_counts(&state.db).await {
        Ok(counts) => {
            status.database = "Connected & Working".to_string();
            status.connection_status = "Connected";
            status.collections = counts
                .into_iter()
                .take(MAX_LISTED_COLLECTIONS)
                .map(|count| CollectionStatus {
                    name: count.collection.table_name(),
                    documents: count.documents,
                })
                .collect();
        }
        Err(e) => {
            warn!("Store health check failed: {}", e);
            let excerpt: String = e.to_string().chars().take(ERROR_EXCERPT_CHARS).collect();
            status.database = format!("Error: {excerpt}");
        }
    }

    Json(status)
}

/// `GET /schema` - field definitions for the three record types.
pub async fn schema() -> Json<BTreeMap<&'static str, RefOr<Schema>>> {
    Json(record_schemas())
}

fn schema_of<T: ToSchema<'static>>() -> RefOr<Schema> {
    T::schema().1
}

/// JSON Schema of the request bodies for Category, Transaction and Budget.
#[must_use]
pub fn record_schemas() -> BTreeMap<&'static str, RefOr<Schema>> {
    BTreeMap::from([
        ("Budget", schema_of::<CreateBudget>()),
        ("Category", schema_of::<CreateCategory>()),
        ("Transaction", schema_of::<CreateTransaction>()),
    ])
}
