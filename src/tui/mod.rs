//! Terminal User Interface module
//!
//! A ratatui front end: budgets and totals in the sidebar, the active
//! budget's items in the main panel, inline forms and editors, and mouse
//! support with click-outside dismissal.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs and forms
pub mod dialogs;
pub mod forms;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
