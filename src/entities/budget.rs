//! Budget entity - A monthly spending limit, overall or for one category.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Month in `YYYY-MM` format
    pub month: String,
    /// Category this budget applies to, `None` for the overall budget
    pub category_id: Option<String>,
    /// Spending limit for the month, strictly positive
    pub limit: f64,
}

/// Budgets have no enforced relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
