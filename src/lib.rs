//! Budget Tracker - terminal budget tracker for recurring payments
//!
//! Budgets hold payment items (bills, subscriptions, savings transfers).
//! Items can be skipped for the current period or marked paid, and the
//! tracker derives per-budget spend, total spend and the overflow left from
//! the total earned.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings (display preferences, seed data)
//! - `error`: Custom error types
//! - `models`: Budgets, items and the money types used to total them
//! - `store`: In-memory budget state with structural sharing
//! - `services`: Validated mutations and derived totals
//! - `audit`: Activity log of every mutation
//! - `interaction`: Dismissible regions and open/closed editor state
//! - `display`: Table rendering for the non-interactive commands
//! - `cli`: Handlers for the non-interactive commands
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{TrackerPaths, Settings};
//! use budget_tracker::services::Summary;
//! use budget_tracker::store::BudgetStore;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = BudgetStore::seeded(&settings)?;
//! println!("{}", Summary::from_store(&store).overflow);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interaction;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
