//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::{Budget, Category, Collection, Transaction};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

/// Store location used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://budget_buddy.sqlite?mode=rwc";

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    tracing::debug!("Connecting to database at {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates every collection's table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    for collection in Collection::ALL {
        create_table(db, collection).await?;
    }
    Ok(())
}

async fn create_table(db: &DatabaseConnection, collection: Collection) -> Result<()> {
    match collection {
        Collection::Categories => create_table_for(db, Category).await,
        Collection::Transactions => create_table_for(db, Transaction).await,
        Collection::Budgets => create_table_for(db, Budget).await,
    }
}

async fn create_table_for<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(builder.build(&statement)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        assert!(Category::find().limit(1).all(&db).await?.is_empty());
        assert!(Transaction::find().limit(1).all(&db).await?.is_empty());
        assert!(Budget::find().limit(1).all(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
