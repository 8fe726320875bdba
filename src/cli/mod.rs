//! CLI command handlers
//!
//! Implementations of the non-interactive commands, bridging clap argument
//! parsing with the store and the display layer.

pub mod activity;
pub mod summary;

pub use activity::handle_log_command;
pub use summary::handle_summary_command;
