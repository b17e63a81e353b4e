//! Summary endpoint: `GET /api/summary`.

use crate::{
    api::{AppState, documents::SummaryDocument, month_filter},
    core::summary::monthly_summary,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

/// Query string for the summary
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// Month in `YYYY-MM` format; all records when absent
    pub month: Option<String>,
}

impl SummaryQuery {
    /// The month filter, treating an empty value as absent.
    #[must_use]
    pub fn month(&self) -> Option<&str> {
        month_filter(self.month.as_deref())
    }
}

/// Returns income, expenses, balance, spending per category and the month's budgets.
#[instrument(skip_all)]
pub async fn summary_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<SummaryDocument>> {
    let Query(query) = query.map_err(|e| Error::validation(e.body_text()))?;
    let summary = monthly_summary(&state.db, query.month()).await?;
    Ok(Json(summary.into()))
}
