//! Store health checks used by the diagnostic endpoint.

use crate::{
    entities::{Budget, Category, Collection, Transaction},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// Number of documents held by one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionCount {
    /// The collection
    pub collection: Collection,
    /// Number of stored records
    pub documents: u64,
}

/// Counts the records in a single collection.
pub async fn count_documents(db: &DatabaseConnection, collection: Collection) -> Result<u64> {
    let count = match collection {
        Collection::Categories => Category::find().count(db).await?,
        Collection::Transactions => Transaction::find().count(db).await?,
        Collection::Budgets => Budget::find().count(db).await?,
    };
    Ok(count)
}

/// Pings the store and counts every collection.
///
/// Fails on the first store error so the caller can report it.
pub async fn collection_counts(db: &DatabaseConnection) -> Result<Vec<CollectionCount>> {
    db.ping().await?;

    let mut counts = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        counts.push(CollectionCount {
            collection,
            documents: count_documents(db, collection).await?,
        });
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_collection_counts() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_category(&db, "Groceries").await?;
        create_dated_transaction(&db, 5.0, "expense", "2024-01-01").await?;
        create_dated_transaction(&db, 6.0, "expense", "2024-01-02").await?;

        let counts = collection_counts(&db).await?;

        assert_eq!(
            counts,
            vec![
                CollectionCount {
                    collection: Collection::Categories,
                    documents: 1
                },
                CollectionCount {
                    collection: Collection::Transactions,
                    documents: 2
                },
                CollectionCount {
                    collection: Collection::Budgets,
                    documents: 0
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_collection_counts_without_tables_fails() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;

        assert!(collection_counts(&db).await.is_err());
        Ok(())
    }
}
