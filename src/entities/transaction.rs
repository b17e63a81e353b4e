//! Transaction entity - A single income or expense record.
//!
//! The amount is always stored positive; `kind` (the `type` column) carries the
//! direction. `category_id` is a weak reference and may point nowhere.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Transaction amount, strictly positive
    pub amount: f64,
    /// `"income"` or `"expense"`
    #[sea_orm(column_name = "type")]
    pub kind: String,
    /// Optional category reference, not checked for existence
    pub category_id: Option<String>,
    /// Short free-form note
    pub note: Option<String>,
    /// When the transaction occurred
    pub date: DateTimeUtc,
}

/// Transactions have no enforced relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
