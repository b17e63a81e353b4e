//! Transaction business logic - creation, listing and month filtering.
//!
//! Amounts are stored positive and the direction lives in the transaction type.
//! Listing and the monthly summary share [`month_condition`], so "list month X"
//! and "summarize month X" always select the same records.

use crate::{
    core::{
        period::build_month_range,
        validation::{parse_timestamp, require_positive},
    },
    entities::{Transaction, transaction},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, prelude::*};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[schema(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Value stored in the `type` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(Error::validation(format!(
                "type must be \"income\" or \"expense\", got {other:?}"
            ))),
        }
    }
}

/// Builds the date filter for an optional `YYYY-MM` month.
///
/// `None` matches every transaction; a malformed month is an
/// [`Error::InvalidMonth`].
pub fn month_condition(month: Option<&str>) -> Result<Condition> {
    let mut condition = Condition::all();
    if let Some(month) = month {
        let range = build_month_range(month)?;
        condition = condition
            .add(transaction::Column::Date.gte(range.gte))
            .add(transaction::Column::Date.lt(range.lt));
    }
    Ok(condition)
}

/// Creates a new transaction after validating every field.
///
/// # Arguments
/// * `amount` - Strictly positive amount
/// * `kind` - `"income"` or `"expense"`
/// * `category_id` - Optional category reference, stored as given
/// * `note` - Optional free-form note
/// * `date` - Optional ISO 8601 timestamp, defaults to now
pub async fn create_transaction(
    db: &DatabaseConnection,
    amount: f64,
    kind: &str,
    category_id: Option<String>,
    note: Option<String>,
    date: Option<&str>,
) -> Result<transaction::Model> {
    let date = match date {
        Some(date) => parse_timestamp(date)?,
        None => Utc::now(),
    };
    let amount = require_positive("amount", amount)?;
    let kind: TransactionKind = kind.parse()?;

    let transaction_model = transaction::ActiveModel {
        amount: Set(amount),
        kind: Set(kind.as_str().to_string()),
        category_id: Set(category_id),
        note: Set(note),
        date: Set(date),
        ..Default::default()
    };

    let result = transaction_model.insert(db).await?;
    Ok(result)
}

/// Lists transactions, optionally restricted to one month and capped at `limit`.
///
/// Records come back in store order (oldest insert first). Passing `None` as
/// the limit returns every match.
pub async fn list_transactions(
    db: &DatabaseConnection,
    month: Option<&str>,
    limit: Option<u64>,
) -> Result<Vec<transaction::Model>> {
    let condition = month_condition(month)?;

    Transaction::find()
        .filter(condition)
        .order_by_asc(transaction::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}
