//! Category business logic - creation, listing and first-run seeding.

use crate::{
    config::CategorySeed,
    core::validation::require_non_blank,
    entities::{Category, category},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};

/// Creates a new category.
///
/// The name must not be blank. A missing color falls back to
/// [`category::DEFAULT_COLOR`], so stored categories always carry one.
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    color: Option<String>,
) -> Result<category::Model> {
    require_non_blank("name", &name)?;

    let category = category::ActiveModel {
        name: Set(name),
        color: Set(color.unwrap_or_else(|| category::DEFAULT_COLOR.to_string())),
        ..Default::default()
    };

    let result = category.insert(db).await?;
    Ok(result)
}

/// Lists categories in store order, optionally capped at `limit` records.
pub async fn list_categories(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts `seeds` when the category collection is empty.
///
/// Returns the number of categories created, zero if the store already held any.
pub async fn seed_categories(db: &DatabaseConnection, seeds: &[CategorySeed]) -> Result<usize> {
    if seeds.is_empty() || Category::find().count(db).await? > 0 {
        return Ok(0);
    }

    for seed in seeds {
        create_category(db, seed.name.clone(), Some(seed.color.clone())).await?;
    }
    tracing::info!("Seeded {} categories", seeds.len());
    Ok(seeds.len())
}
