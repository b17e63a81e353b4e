//! JSON shapes returned by the API.
//!
//! Every document carries its store id as a string and renders timestamps as
//! RFC 3339 strings in UTC.

use crate::{
    core::summary::Summary,
    entities::{budget, category, transaction},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Renders a timestamp the way every document exposes it.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Response to a successful create
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreatedDocument {
    /// Id assigned by the store
    pub id: String,
}

impl CreatedDocument {
    /// Wraps a store id.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self { id: id.to_string() }
    }
}

/// A stored category
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryDocument {
    /// Store id
    pub id: String,
    /// Category name
    pub name: String,
    /// Hex color
    pub color: String,
}

impl From<category::Model> for CategoryDocument {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
            color: model.color,
        }
    }
}

/// A stored transaction
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionDocument {
    /// Store id
    pub id: String,
    /// Positive amount
    pub amount: f64,
    /// `"income"` or `"expense"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Category reference, if any
    pub category_id: Option<String>,
    /// Free-form note, if any
    pub note: Option<String>,
    /// When the transaction occurred
    pub date: String,
}

impl From<transaction::Model> for TransactionDocument {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id.to_string(),
            amount: model.amount,
            kind: model.kind,
            category_id: model.category_id,
            note: model.note,
            date: format_timestamp(&model.date),
        }
    }
}

/// A stored budget
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetDocument {
    /// Store id
    pub id: String,
    /// Month in `YYYY-MM` format
    pub month: String,
    /// Category reference, `None` for the overall budget
    pub category_id: Option<String>,
    /// Spending limit
    pub limit: f64,
}

impl From<budget::Model> for BudgetDocument {
    fn from(model: budget::Model) -> Self {
        Self {
            id: model.id.to_string(),
            month: model.month,
            category_id: model.category_id,
            limit: model.limit,
        }
    }
}

/// The monthly summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryDocument {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of expense amounts
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
    /// Expense amounts keyed by category id or `"uncategorized"`
    pub spending_by_category: BTreeMap<String, f64>,
    /// Budgets for the month
    pub budgets: Vec<BudgetDocument>,
}

impl From<Summary> for SummaryDocument {
    fn from(summary: Summary) -> Self {
        Self {
            income: summary.income,
            expenses: summary.expenses,
            balance: summary.balance,
            spending_by_category: summary.spending_by_category,
            budgets: summary.budgets.into_iter().map(Into::into).collect(),
        }
    }
}
