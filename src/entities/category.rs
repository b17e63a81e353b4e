//! Category entity - A label that transactions and budgets can point at.
//!
//! Categories are only created and listed. Nothing references them through a
//! foreign key; `category_id` fields on other records are plain strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Color assigned to a category when the caller does not pick one
pub const DEFAULT_COLOR: &str = "#60a5fa";

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Groceries", "Rent")
    pub name: String,
    /// Hex color for UI tags
    pub color: String,
}

/// Categories have no enforced relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
