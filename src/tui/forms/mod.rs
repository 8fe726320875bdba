//! Inline entry forms

pub mod budget;
pub mod item;

pub use budget::BudgetFormState;
pub use item::{ItemField, ItemFormState};
