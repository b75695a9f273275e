//! Spending service

use crate::error::BudgetResult;
use crate::reports::spending::{aggregate_spending, SpendingByCategory};
use crate::storage::Storage;

/// Read-side service computing spending per category
pub struct SpendingService<'a> {
    storage: &'a Storage,
}

impl<'a> SpendingService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Spending and budget limit for every category, in category order
    ///
    /// Categories without a goal report no limit; goals are not backfilled
    /// here.
    pub fn get_spending_by_category(&self) -> BudgetResult<Vec<SpendingByCategory>> {
        self.storage.simulate_aggregate();

        let categories = self.storage.categories.get_all()?;
        let expenses = self.storage.expenses.get_all()?;
        let goals = self.storage.budget_goals.get_all()?;

        Ok(aggregate_spending(&categories, &expenses, &goals))
    }
}
