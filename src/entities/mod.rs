//! Entity module - Contains all SeaORM entity definitions for the store.
//! Each entity has a Model struct for data and an Entity struct for operations.
//! [`Collection`] names the table behind each entity.

pub mod budget;
pub mod category;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use budget::Entity as Budget;
pub use category::Entity as Category;
pub use transaction::Entity as Transaction;

/// The collections held by the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Category records
    Categories,
    /// Transaction records
    Transactions,
    /// Budget records
    Budgets,
}

impl Collection {
    /// Every collection, in creation order.
    pub const ALL: [Self; 3] = [Self::Categories, Self::Transactions, Self::Budgets];

    /// Name of the table backing this collection.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Transactions => "transactions",
            Self::Budgets => "budgets",
        }
    }
}
