//! Expense repository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BudgetError;
use crate::models::{CategoryId, Expense, ExpenseId};

/// In-memory expense collection, insertion ordered
#[derive(Debug, Default)]
pub struct ExpenseRepository {
    expenses: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Expense>>, BudgetError> {
        self.expenses
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Expense>>, BudgetError> {
        self.expenses
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<Expense>, BudgetError> {
        Ok(self.read()?.clone())
    }

    /// Look up an expense by ID (full or short form)
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, BudgetError> {
        Ok(self
            .read()?
            .iter()
            .find(|e| e.id.matches(identifier))
            .cloned())
    }

    /// Expenses recorded against one category, in insertion order
    pub fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, BudgetError> {
        Ok(self
            .read()?
            .iter()
            .filter(|e| e.category_id == category_id)
            .cloned()
            .collect())
    }

    pub fn count_for_category(&self, category_id: CategoryId) -> Result<usize, BudgetError> {
        Ok(self
            .read()?
            .iter()
            .filter(|e| e.category_id == category_id)
            .count())
    }

    pub fn insert(&self, expense: Expense) -> Result<(), BudgetError> {
        self.write()?.push(expense);
        Ok(())
    }

    /// Replace the expense with the same ID, returning the previous value
    pub fn replace(&self, expense: Expense) -> Result<Option<Expense>, BudgetError> {
        let mut expenses = self.write()?;
        match expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => Ok(Some(std::mem::replace(slot, expense))),
            None => Ok(None),
        }
    }

    pub fn remove(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        let mut expenses = self.write()?;
        Ok(expenses
            .iter()
            .position(|e| e.id == id)
            .map(|index| expenses.remove(index)))
    }

    /// Remove every expense of a category, returning the removed expenses
    pub fn remove_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, BudgetError> {
        let mut expenses = self.write()?;
        let (removed, kept): (Vec<_>, Vec<_>) = expenses
            .drain(..)
            .partition(|e| e.category_id == category_id);
        *expenses = kept;
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, BudgetError> {
        Ok(self.read()?.len())
    }

    pub fn replace_all(&self, expenses: Vec<Expense>) -> Result<(), BudgetError> {
        *self.write()? = expenses;
        Ok(())
    }
}
