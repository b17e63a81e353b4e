//! HTTP layer - axum router, handlers and response documents.
//!
//! Handlers only translate between HTTP and the `core` operations; the store
//! connection reaches them through [`AppState`].

/// Budget endpoints
pub mod budgets;
/// Category endpoints
pub mod categories;
/// Health check and schema endpoints
pub mod diagnostics;
/// Serialized response shapes
pub mod documents;
/// Summary endpoint
pub mod summary;
/// Transaction endpoints
pub mod transactions;

use crate::{config::ServerSettings, errors::Result};
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all store operations
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates the handler state around a store connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

/// Treats an empty `month=` value as no month filter.
fn month_filter(month: Option<&str>) -> Option<&str> {
    month.filter(|month| !month.is_empty())
}

/// Query string accepted by the month-filtered list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    /// Month in `YYYY-MM` format
    pub month: Option<String>,
    /// Maximum number of records
    pub limit: Option<u64>,
}

impl MonthQuery {
    /// The month filter, treating an empty value as absent.
    #[must_use]
    pub fn month(&self) -> Option<&str> {
        month_filter(self.month.as_deref())
    }
}

/// Builds the application router.
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    let app = Router::new()
        // diagnostics
        .route("/", get(diagnostics::root))
        .route("/api/hello", get(diagnostics::hello))
        .route("/test", get(diagnostics::test_database))
        .route("/schema", get(diagnostics::schema))
        // categories
        .route(
            "/api/categories",
            get(categories::list_categories_handler).post(categories::create_category_handler),
        )
        // transactions
        .route(
            "/api/transactions",
            get(transactions::list_transactions_handler)
                .post(transactions::create_transaction_handler),
        )
        // budgets
        .route(
            "/api/budgets",
            get(budgets::list_budgets_handler).post(budgets::create_budget_handler),
        )
        // summary
        .route("/api/summary", get(summary::summary_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if settings.allow_any_origin {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Binds the listener and serves requests until Ctrl-C.
pub async fn serve(db: DatabaseConnection, settings: &ServerSettings) -> Result<()> {
    let addr = settings.socket_addr()?;
    let app = router(AppState::new(db), settings);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving; the process can still be stopped externally
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{get_json, post_json};
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_empty_month_is_no_filter() {
        let query = MonthQuery {
            month: Some(String::new()),
            limit: None,
        };
        assert_eq!(query.month(), None);

        let query = MonthQuery {
            month: Some("2024-05".to_string()),
            limit: None,
        };
        assert_eq!(query.month(), Some("2024-05"));
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_server_errors() -> Result<()> {
        // No tables: every store query fails
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let app = router(AppState::new(db), &ServerSettings::default());

        for uri in [
            "/api/categories",
            "/api/transactions",
            "/api/transactions?month=2024-05",
            "/api/budgets",
            "/api/summary",
            "/api/summary?month=2024-05",
        ] {
            let (status, body) = get_json(&app, uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, json!({"detail": "Database error"}), "{uri}");
        }

        for (uri, payload) in [
            ("/api/categories", json!({"name": "Rent"})),
            ("/api/transactions", json!({"amount": 5, "type": "expense"})),
            ("/api/budgets", json!({"month": "2024-05", "limit": 100})),
        ] {
            let (status, body) = post_json(&app, uri, payload).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, json!({"detail": "Database error"}), "{uri}");
        }
        Ok(())
    }
}
