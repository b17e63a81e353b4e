//! Budget endpoints: `GET /api/budgets` and `POST /api/budgets`.

use crate::{
    api::{
        AppState, MonthQuery,
        documents::{BudgetDocument, CreatedDocument},
    },
    core::{budget, validation::bounded_limit},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

const DEFAULT_LIMIT: u64 = 200;
const MAX_LIMIT: u64 = 1000;

/// Body of `POST /api/budgets`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBudget {
    /// Month in `YYYY-MM` format
    #[schema(pattern = "^[0-9]{4}-(0[1-9]|1[0-2])$")]
    pub month: String,
    /// Category reference, absent for the overall budget
    #[serde(default)]
    pub category_id: Option<String>,
    /// Strictly positive spending limit
    #[schema(exclusive_minimum = 0)]
    pub limit: f64,
}

/// Lists budgets; `month` matches the stored month string exactly.
#[instrument(skip_all)]
pub async fn list_budgets_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<BudgetDocument>>> {
    let Query(query) = query.map_err(|e| Error::validation(e.body_text()))?;
    let limit = bounded_limit(query.limit, Some(DEFAULT_LIMIT), MAX_LIMIT)?;

    let budgets = budget::list_budgets(&state.db, query.month(), limit).await?;
    Ok(Json(budgets.into_iter().map(Into::into).collect()))
}

/// Creates a budget and returns its id.
#[instrument(skip_all)]
pub async fn create_budget_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateBudget>, JsonRejection>,
) -> Result<Json<CreatedDocument>> {
    let Json(payload) = payload.map_err(|e| Error::validation(e.body_text()))?;

    let created =
        budget::create_budget(&state.db, payload.month, payload.category_id, payload.limit)
            .await?;
    info!("Created budget {} for {}", created.id, created.month);
    Ok(Json(CreatedDocument::new(created.id)))
}
