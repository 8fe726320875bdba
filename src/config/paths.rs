//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/budget-tracker` on Linux)
//! 3. `$HOME/.config/budget-tracker` when no platform directory is known

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "BUDGET_TRACKER_DIR";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for settings and the activity log
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override, the platform directory nor
    /// the home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the activity log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    if let Some(dirs) = ProjectDirs::from("", "", "budget-tracker") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| TrackerError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("budget-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("activity.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DIR_ENV_VAR, custom_path);
        let paths = TrackerPaths::new().unwrap();
        env::remove_var(DIR_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("tracker");
        let paths = TrackerPaths::with_base_dir(base.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
