//! Budget goal repository
//!
//! Holds goals in insertion order. The one-goal-per-category rule is enforced
//! by the budget goal service, not here.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BudgetError;
use crate::models::{BudgetGoal, BudgetGoalId, CategoryId};

#[derive(Debug, Default)]
pub struct BudgetGoalRepository {
    goals: RwLock<Vec<BudgetGoal>>,
}

impl BudgetGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<BudgetGoal>>, BudgetError> {
        self.goals
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<BudgetGoal>>, BudgetError> {
        self.goals
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    pub fn get(&self, id: BudgetGoalId) -> Result<Option<BudgetGoal>, BudgetError> {
        Ok(self.read()?.iter().find(|g| g.id == id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<BudgetGoal>, BudgetError> {
        Ok(self.read()?.clone())
    }

    /// The goal attached to a category, if any
    pub fn get_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Option<BudgetGoal>, BudgetError> {
        Ok(self
            .read()?
            .iter()
            .find(|g| g.category_id == category_id)
            .cloned())
    }

    pub fn insert(&self, goal: BudgetGoal) -> Result<(), BudgetError> {
        self.write()?.push(goal);
        Ok(())
    }

    /// Overwrite the goal stored under `id`, returning the previous value
    pub fn replace(
        &self,
        id: BudgetGoalId,
        goal: BudgetGoal,
    ) -> Result<Option<BudgetGoal>, BudgetError> {
        let mut goals = self.write()?;
        match goals.iter_mut().find(|g| g.id == id) {
            Some(slot) => Ok(Some(std::mem::replace(slot, goal))),
            None => Ok(None),
        }
    }

    /// Remove every goal attached to a category, returning the first one
    pub fn remove_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Option<BudgetGoal>, BudgetError> {
        let mut goals = self.write()?;
        let (removed, kept): (Vec<_>, Vec<_>) =
            goals.drain(..).partition(|g| g.category_id == category_id);
        *goals = kept;
        Ok(removed.into_iter().next())
    }

    pub fn count(&self) -> Result<usize, BudgetError> {
        Ok(self.read()?.len())
    }

    pub fn replace_all(&self, goals: Vec<BudgetGoal>) -> Result<(), BudgetError> {
        *self.write()? = goals;
        Ok(())
    }
}
