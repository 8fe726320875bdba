//! User settings for the budget tracker
//!
//! Settings hold display preferences and the seed data a session starts from.
//! Budget state itself is never written back; every session starts from the
//! seed.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{ItemDraft, Money};

/// A budget created when a session starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBudget {
    pub name: String,

    /// Items added to the budget, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemDraft>,
}

impl SeedBudget {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for "last paid" dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Income the session starts with (in cents)
    #[serde(default = "default_total_earned")]
    pub total_earned: Money,

    /// Budgets the session starts with
    #[serde(default = "default_budgets")]
    pub budgets: Vec<SeedBudget>,

    /// Whether store mutations are appended to the activity log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Input polling tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_total_earned() -> Money {
    Money::from_cents(1_000_000)
}

fn default_budgets() -> Vec<SeedBudget> {
    ["Monthly Bills", "Subscriptions", "Savings"]
        .into_iter()
        .map(SeedBudget::named)
        .collect()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            total_earned: default_total_earned(),
            budgets: default_budgets(),
            audit_enabled: default_audit_enabled(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.total_earned, Money::from_cents(1_000_000));

        let names: Vec<_> = settings.budgets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Monthly Bills", "Subscriptions", "Savings"]);
        assert!(settings.budgets.iter().all(|b| b.items.is_empty()));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.total_earned = Money::from_cents(420_000);
        settings.budgets.push(SeedBudget::named("Travel"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.total_earned, Money::from_cents(420_000));
        assert_eq!(loaded.budgets.len(), 4);
        assert_eq!(loaded.budgets[3].name, "Travel");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "currency_symbol": "€" }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.budgets.len(), 3);
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
