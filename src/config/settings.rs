//! User settings for budget-easy
//!
//! Display preferences, audit logging and the simulated storage latency.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Fixed delays applied before store operations, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    /// Delay before plain reads
    #[serde(default = "default_read_ms")]
    pub read_ms: u64,

    /// Delay before creates, updates and deletes
    #[serde(default = "default_write_ms")]
    pub write_ms: u64,

    /// Delay before computing spending by category
    #[serde(default = "default_aggregate_ms")]
    pub aggregate_ms: u64,
}

fn default_read_ms() -> u64 {
    50
}

fn default_write_ms() -> u64 {
    100
}

fn default_aggregate_ms() -> u64 {
    100
}

impl LatencySettings {
    /// No delay at all
    pub const fn none() -> Self {
        Self {
            read_ms: 0,
            write_ms: 0,
            aggregate_ms: 0,
        }
    }

    pub fn read(&self) -> Duration {
        Duration::from_millis(self.read_ms)
    }

    pub fn write(&self) -> Duration {
        Duration::from_millis(self.write_ms)
    }

    pub fn aggregate(&self) -> Duration {
        Duration::from_millis(self.aggregate_ms)
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            read_ms: default_read_ms(),
            write_ms: default_write_ms(),
            aggregate_ms: default_aggregate_ms(),
        }
    }
}

/// User settings for budget-easy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Simulated storage latency
    #[serde(default)]
    pub latency: LatencySettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
            latency: LatencySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved here; `init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
