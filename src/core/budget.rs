//! Budget business logic - creation and listing of monthly limits.

use crate::{
    core::{period::parse_month, validation::require_positive},
    entities::{Budget, budget},
    errors::Result,
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Creates a monthly budget.
///
/// `month` must be a valid `YYYY-MM` value and `limit` strictly positive.
/// A `None` category means the budget covers all spending for the month.
pub async fn create_budget(
    db: &DatabaseConnection,
    month: String,
    category_id: Option<String>,
    limit: f64,
) -> Result<budget::Model> {
    parse_month(&month)?;
    let limit = require_positive("limit", limit)?;

    let budget = budget::ActiveModel {
        month: Set(month),
        category_id: Set(category_id),
        limit: Set(limit),
        ..Default::default()
    };

    let result = budget.insert(db).await?;
    Ok(result)
}

/// Lists budgets in store order.
///
/// When `month` is given only budgets whose month string matches exactly are
/// returned. `limit` caps the number of records; `None` returns all of them.
pub async fn list_budgets(
    db: &DatabaseConnection,
    month: Option<&str>,
    limit: Option<u64>,
) -> Result<Vec<budget::Model>> {
    let mut query = Budget::find();
    if let Some(month) = month {
        query = query.filter(budget::Column::Month.eq(month));
    }

    query
        .order_by_asc(budget::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}
