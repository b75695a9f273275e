//! Expense service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryId, Expense, ExpenseId, NewExpense};
use crate::storage::Storage;

/// Service for recording and editing expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// The category is not required to exist; an unknown category is logged
    /// and the expense is stored anyway.
    pub fn add_expense(&self, new_expense: NewExpense) -> BudgetResult<Expense> {
        self.storage.simulate_write();

        new_expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if !self.storage.categories.contains(new_expense.category_id)? {
            tracing::warn!(
                category_id = %new_expense.category_id,
                "expense recorded against an unknown category"
            );
        }

        let expense = new_expense.into_expense(ExpenseId::new());
        self.storage.expenses.insert(expense.clone())?;
        self.storage.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        tracing::info!(id = %expense.id, amount = %expense.amount, "expense recorded");
        Ok(expense)
    }

    /// Replace a stored expense
    pub fn update_expense(&self, expense: Expense) -> BudgetResult<Expense> {
        self.storage.simulate_write();

        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let before = self
            .storage
            .expenses
            .replace(expense.clone())?
            .ok_or_else(|| BudgetError::expense_not_found(expense.id.to_string()))?;

        self.storage.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &before,
            &expense,
            describe_changes(&before, &expense),
        )?;

        tracing::info!(id = %expense.id, "expense updated");
        Ok(expense)
    }

    /// Remove an expense, returning it
    pub fn delete_expense(&self, id: ExpenseId) -> BudgetResult<Expense> {
        self.storage.simulate_write();

        let expense = self
            .storage
            .expenses
            .remove(id)?
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        self.storage.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        tracing::info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn get_expenses(&self) -> BudgetResult<Vec<Expense>> {
        self.storage.simulate_read();
        self.storage.expenses.get_all()
    }

    pub fn get_expense(&self, id: ExpenseId) -> BudgetResult<Option<Expense>> {
        self.storage.simulate_read();
        self.storage.expenses.get(id)
    }

    /// Find an expense by full or short ID
    pub fn find_expense(&self, identifier: &str) -> BudgetResult<Option<Expense>> {
        self.storage.simulate_read();
        self.storage.expenses.find(identifier)
    }

    /// All expenses, newest first; same-day expenses keep insertion order
    pub fn list_recent_first(&self) -> BudgetResult<Vec<Expense>> {
        let mut expenses = self.get_expenses()?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    pub fn list_for_category(&self, category_id: CategoryId) -> BudgetResult<Vec<Expense>> {
        self.storage.simulate_read();
        self.storage.expenses.get_by_category(category_id)
    }

    /// Expenses dated within `start..=end`
    pub fn list_between(&self, start: NaiveDate, end: NaiveDate) -> BudgetResult<Vec<Expense>> {
        Ok(self
            .get_expenses()?
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }
}

fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            before.description, after.description
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category_id != after.category_id {
        changes.push(format!(
            "category: {} -> {}",
            before.category_id, after.category_id
        ));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
