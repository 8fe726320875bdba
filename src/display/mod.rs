//! Display formatting for terminal output
//!
//! Table rendering used by the non-interactive commands.

pub mod items;
pub mod summary;

pub use items::{format_item_table, format_last_paid, item_status};
pub use summary::{format_budget_table, format_summary, format_totals};
