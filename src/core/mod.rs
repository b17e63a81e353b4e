//! Core business logic, independent of the HTTP layer.
//!
//! Every operation takes the store connection explicitly and returns entity
//! models or plain structs that the API layer serializes.

/// Budget creation and listing
pub mod budget;
/// Category creation, listing and seeding
pub mod category;
/// `YYYY-MM` parsing and month ranges
pub mod period;
/// Store reachability and per-collection counts
pub mod status;
/// Income/expense aggregation for a month
pub mod summary;
/// Transaction creation and listing
pub mod transaction;
/// Field checks shared by the create operations
pub mod validation;
