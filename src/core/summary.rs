//! Monthly summary - income, expenses, balance and spending per category.
//!
//! The summary scans every transaction in the selected month (no limit) in a
//! single pass and attaches the budgets recorded for the same month. All data
//! is fetched fresh for each call.

use crate::{
    core::{
        budget::list_budgets,
        transaction::{TransactionKind, list_transactions},
    },
    entities::{budget, transaction},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

/// Grouping key for expenses without a category reference.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Totals derived from a set of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of expense amounts
    pub expenses: f64,
    /// Expense amounts grouped by category key
    pub spending_by_category: BTreeMap<String, f64>,
}

impl Totals {
    /// Income minus expenses.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Summary for one month, or for all time when no month is given.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of expense amounts
    pub expenses: f64,
    /// `income - expenses`
    pub balance: f64,
    /// Expense amounts grouped by category key
    pub spending_by_category: BTreeMap<String, f64>,
    /// Budgets for the same month, in store order
    pub budgets: Vec<budget::Model>,
}

/// Returns the grouping key for a transaction's category reference.
///
/// Missing and empty references both map to [`UNCATEGORIZED`].
#[must_use]
pub fn category_key(category_id: Option<&str>) -> String {
    match category_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => UNCATEGORIZED.to_string(),
    }
}

/// Reduces `transactions` into income, expense and per-category totals.
///
/// The stored type decides the direction; amounts are added as they are.
/// Records with an unrecognized type are ignored.
#[must_use]
pub fn aggregate(transactions: &[transaction::Model]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            match transaction.kind.parse::<TransactionKind>() {
                Ok(TransactionKind::Income) => totals.income += transaction.amount,
                Ok(TransactionKind::Expense) => {
                    totals.expenses += transaction.amount;
                    *totals
                        .spending_by_category
                        .entry(category_key(transaction.category_id.as_deref()))
                        .or_insert(0.0) += transaction.amount;
                }
                Err(_) => {
                    tracing::warn!(
                        "Skipping transaction {} with unknown type {:?}",
                        transaction.id,
                        transaction.kind
                    );
                }
            }
            totals
        })
}

/// Builds the summary for `month` (`YYYY-MM`), or across all records when `None`.
///
/// A malformed month fails with [`crate::errors::Error::InvalidMonth`] before
/// the store is queried.
pub async fn monthly_summary(db: &DatabaseConnection, month: Option<&str>) -> Result<Summary> {
    let transactions = list_transactions(db, month, None).await?;
    let totals = aggregate(&transactions);
    let budgets = list_budgets(db, month, None).await?;

    tracing::debug!(
        "Summarized {} transactions and {} budgets for {:?}",
        transactions.len(),
        budgets.len(),
        month
    );

    Ok(Summary {
        income: totals.income,
        expenses: totals.expenses,
        balance: totals.balance(),
        spending_by_category: totals.spending_by_category,
        budgets,
    })
}
