//! Core data models for the budget tracker
//!
//! Budgets, their payment items, and the money types used to total them.

pub mod amount;
pub mod budget;
pub mod ids;
pub mod item;
pub mod money;

pub use amount::Amount;
pub use budget::{Budget, BudgetDraft, BudgetKey};
pub use ids::{BudgetId, ItemId};
pub use item::{Frequency, Item, ItemDraft};
pub use money::{Money, MoneyParseError};
