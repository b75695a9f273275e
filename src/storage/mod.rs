//! Storage layer for budget-easy
//!
//! `Storage` owns the three entity collections and is handed to the services
//! by reference. A store is either purely in memory or backed by a JSON
//! snapshot file written atomically after every mutation.

pub mod budget_goals;
pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod seed;

pub use budget_goals::BudgetGoalRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use seed::seed_demo_data;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{BudgetPaths, LatencySettings, Settings};
use crate::error::BudgetError;
use crate::models::{BudgetGoal, Category, Expense};

/// Current snapshot layout version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serializable image of the whole store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budget_goals: Vec<BudgetGoal>,
}

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            categories: Vec::new(),
            expenses: Vec::new(),
            budget_goals: Vec::new(),
        }
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    snapshot_path: Option<PathBuf>,
    latency: LatencySettings,
    audit: Option<AuditLogger>,
    pub categories: CategoryRepository,
    pub expenses: ExpenseRepository,
    pub budget_goals: BudgetGoalRepository,
}

impl Storage {
    /// A store with no persistence, no audit log and no simulated latency
    pub fn in_memory() -> Self {
        Self {
            snapshot_path: None,
            latency: LatencySettings::none(),
            audit: None,
            categories: CategoryRepository::new(),
            expenses: ExpenseRepository::new(),
            budget_goals: BudgetGoalRepository::new(),
        }
    }

    /// A store backed by the snapshot file under `paths`, loaded immediately
    pub fn open(paths: &BudgetPaths, settings: &Settings) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        let storage = Self {
            snapshot_path: Some(paths.store_file()),
            latency: settings.latency,
            audit: settings
                .audit_enabled
                .then(|| AuditLogger::new(paths.audit_log())),
            categories: CategoryRepository::new(),
            expenses: ExpenseRepository::new(),
            budget_goals: BudgetGoalRepository::new(),
        };

        storage.load()?;
        Ok(storage)
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Reload all collections from the snapshot file
    ///
    /// A missing file yields an empty store. No-op for in-memory stores.
    pub fn load(&self) -> Result<(), BudgetError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        let snapshot: StoreSnapshot = read_json(path)?;
        if snapshot.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(BudgetError::Storage(format!(
                "Snapshot schema version {} is newer than supported version {}",
                snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }

        self.restore(snapshot)?;
        tracing::debug!(path = %path.display(), "store loaded");
        Ok(())
    }

    /// Write all collections to the snapshot file. No-op for in-memory stores.
    pub fn save(&self) -> Result<(), BudgetError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        write_json_atomic(path, &self.snapshot()?)
    }

    /// Copy the current contents into a snapshot
    pub fn snapshot(&self) -> Result<StoreSnapshot, BudgetError> {
        Ok(StoreSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            categories: self.categories.get_all()?,
            expenses: self.expenses.get_all()?,
            budget_goals: self.budget_goals.get_all()?,
        })
    }

    /// Replace the current contents with a snapshot
    pub fn restore(&self, snapshot: StoreSnapshot) -> Result<(), BudgetError> {
        self.categories.replace_all(snapshot.categories)?;
        self.expenses.replace_all(snapshot.expenses)?;
        self.budget_goals.replace_all(snapshot.budget_goals)?;
        Ok(())
    }

    /// True when the store holds no entities at all
    pub fn is_empty(&self) -> Result<bool, BudgetError> {
        Ok(self.categories.count()? == 0
            && self.expenses.count()? == 0
            && self.budget_goals.count()? == 0)
    }

    // Simulated latency

    pub fn simulate_read(&self) {
        pause(self.latency.read());
    }

    pub fn simulate_write(&self) {
        pause(self.latency.write());
    }

    pub fn simulate_aggregate(&self) {
        pause(self.latency.aggregate());
    }

    // Audit helpers

    fn log_audit(&self, entry: AuditEntry) -> Result<(), BudgetError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgetError> {
        self.log_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        changes: Option<String>,
    ) -> Result<(), BudgetError> {
        self.log_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            changes,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgetError> {
        self.log_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}
