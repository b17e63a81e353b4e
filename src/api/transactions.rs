//! Transaction endpoints: `GET /api/transactions` and `POST /api/transactions`.

use crate::{
    api::{
        AppState, MonthQuery,
        documents::{CreatedDocument, TransactionDocument},
    },
    core::{
        transaction::{self, TransactionKind},
        validation::bounded_limit,
    },
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

const DEFAULT_LIMIT: u64 = 100;
const MAX_LIMIT: u64 = 1000;

/// Body of `POST /api/transactions`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransaction {
    /// Strictly positive amount
    #[schema(exclusive_minimum = 0)]
    pub amount: f64,
    /// `"income"` or `"expense"`
    #[serde(rename = "type")]
    #[schema(value_type = TransactionKind, inline)]
    pub kind: String,
    /// Optional category reference
    #[serde(default)]
    pub category_id: Option<String>,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
    /// Optional ISO 8601 timestamp, defaults to now
    #[serde(default)]
    #[schema(format = DateTime)]
    pub date: Option<String>,
}

/// Lists transactions, optionally for one month.
#[instrument(skip_all)]
pub async fn list_transactions_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<TransactionDocument>>> {
    let Query(query) = query.map_err(|e| Error::validation(e.body_text()))?;
    let limit = bounded_limit(query.limit, Some(DEFAULT_LIMIT), MAX_LIMIT)?;

    let transactions = transaction::list_transactions(&state.db, query.month(), limit).await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// Records a transaction and returns its id.
#[instrument(skip_all)]
pub async fn create_transaction_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateTransaction>, JsonRejection>,
) -> Result<Json<CreatedDocument>> {
    let Json(payload) = payload.map_err(|e| Error::validation(e.body_text()))?;

    let created = transaction::create_transaction(
        &state.db,
        payload.amount,
        &payload.kind,
        payload.category_id,
        payload.note,
        payload.date.as_deref(),
    )
    .await?;
    info!("Created {} transaction {}", created.kind, created.id);
    Ok(Json(CreatedDocument::new(created.id)))
}
