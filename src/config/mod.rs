//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - Settings persistence (display preferences and seed data)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
