//! Path management for budget-easy
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_EASY_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/budget-easy` on Linux, `%APPDATA%\budget-easy\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_EASY_DATA_DIR";

/// Manages all paths used by budget-easy
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        if let Some(custom) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(Self {
                base_dir: PathBuf::from(custom),
            });
        }

        let dirs = ProjectDirs::from("", "", "budget-easy").ok_or_else(|| {
            BudgetError::Config("Could not determine a home directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Use an explicit base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Settings file (`<base>/config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Audit log (`<base>/audit.log`)
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Store snapshot holding categories, expenses and goals
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether `init` has been run (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
