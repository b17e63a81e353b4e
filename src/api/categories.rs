//! Category endpoints: `GET /api/categories` and `POST /api/categories`.

use crate::{
    api::{
        AppState,
        documents::{CategoryDocument, CreatedDocument},
    },
    core::{category, validation::bounded_limit},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

/// Largest `limit` accepted when listing categories.
const MAX_LIMIT: u64 = 200;

/// Query string for listing categories
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    /// Maximum number of records, unbounded when absent
    pub limit: Option<u64>,
}

/// Body of `POST /api/categories`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategory {
    /// Category name, e.g. Groceries or Rent
    #[schema(min_length = 1)]
    pub name: String,
    /// Hex color for UI tags, defaulted when absent or null
    #[serde(default)]
    #[schema(default = "#60a5fa")]
    pub color: Option<String>,
}

/// Lists categories.
#[instrument(skip_all)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<CategoryDocument>>> {
    let Query(query) = query.map_err(|e| Error::validation(e.body_text()))?;
    let limit = bounded_limit(query.limit, None, MAX_LIMIT)?;

    let categories = category::list_categories(&state.db, limit).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Creates a category and returns its id.
#[instrument(skip_all)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCategory>, JsonRejection>,
) -> Result<Json<CreatedDocument>> {
    let Json(payload) = payload.map_err(|e| Error::validation(e.body_text()))?;

    let created = category::create_category(&state.db, payload.name, payload.color).await?;
    info!("Created category {}", created.id);
    Ok(Json(CreatedDocument::new(created.id)))
}
