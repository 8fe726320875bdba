//! Service layer
//!
//! Services wrap the store with validation and activity logging. Summary
//! figures are derived on demand and never stored.

pub mod budget;
pub mod summary;

pub use budget::BudgetService;
pub use summary::{BudgetSpend, Summary};
