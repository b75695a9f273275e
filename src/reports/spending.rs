//! Spending by category
//!
//! Rolls expenses up per category and joins the totals with each category's
//! budget limit. Totals are recomputed on every call.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetGoal, Category, CategoryId, Expense, Money};
use crate::services::SpendingService;
use crate::storage::Storage;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingByCategory {
    pub category_id: CategoryId,
    /// Category name
    pub name: String,
    /// Sum of all expense amounts in the category
    pub total_spending: Money,
    /// Category color token
    pub color: String,
    /// Limit from the category's budget goal, if it has one
    pub budget_limit: Option<Money>,
}

impl SpendingByCategory {
    /// The budget limit, treating a missing goal as zero
    pub fn limit_or_zero(&self) -> Money {
        self.budget_limit.unwrap_or_default()
    }
}

/// Sum expenses per category and attach goal limits
///
/// Rows follow the order of `categories`. Categories without expenses get a
/// zero total; expenses whose category is not in `categories` are ignored.
pub fn aggregate_spending(
    categories: &[Category],
    expenses: &[Expense],
    goals: &[BudgetGoal],
) -> Vec<SpendingByCategory> {
    let mut totals: HashMap<CategoryId, Money> = HashMap::with_capacity(categories.len());
    for expense in expenses {
        *totals.entry(expense.category_id).or_default() += expense.amount;
    }

    let limits: HashMap<CategoryId, Money> =
        goals.iter().map(|g| (g.category_id, g.limit)).collect();

    categories
        .iter()
        .map(|category| SpendingByCategory {
            category_id: category.id,
            name: category.name.clone(),
            total_spending: totals.get(&category.id).copied().unwrap_or_default(),
            color: category.color.clone(),
            budget_limit: limits.get(&category.id).copied(),
        })
        .collect()
}

/// Spending report across all categories
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// One row per category, in category order
    pub rows: Vec<SpendingByCategory>,
    /// Sum of all category totals
    pub total_spending: Money,
    /// Sum of all budget limits
    pub total_budget: Money,
}

impl SpendingReport {
    /// Build the report from the current store contents
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let rows = SpendingService::new(storage).get_spending_by_category()?;
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<SpendingByCategory>) -> Self {
        let total_spending = rows.iter().map(|r| r.total_spending).sum();
        let total_budget = rows.iter().map(|r| r.limit_or_zero()).sum();
        Self {
            rows,
            total_spending,
            total_budget,
        }
    }

    /// The categories with the highest spending, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<&SpendingByCategory> {
        let mut rows: Vec<_> = self
            .rows
            .iter()
            .filter(|r| r.total_spending.is_positive())
            .collect();
        rows.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));
        rows.truncate(limit);
        rows
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No categories yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>12} {:>12} {:>6}\n",
            "Category", "Spent", "Budget", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            let budget = match row.budget_limit {
                Some(limit) if limit.is_positive() => limit.to_string(),
                _ => "Not set".to_string(),
            };
            let share = row.total_spending.percent_of(self.total_spending);

            output.push_str(&format!(
                "{:<30} {:>12} {:>12} {:>5.1}%\n",
                row.name,
                row.total_spending.to_string(),
                budget,
                share
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>12}\n",
            "TOTAL",
            self.total_spending.to_string(),
            self.total_budget.to_string()
        ));

        output
    }

    /// Export the report as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Category", "Color", "Spent", "Budget Limit", "Share %"])?;

        for row in &self.rows {
            csv_writer.write_record([
                row.name.clone(),
                row.color.clone(),
                format!("{:.2}", row.total_spending.as_f64()),
                row.budget_limit
                    .map(|limit| format!("{:.2}", limit.as_f64()))
                    .unwrap_or_default(),
                format!(
                    "{:.2}",
                    row.total_spending.percent_of(self.total_spending)
                ),
            ])?;
        }

        csv_writer.write_record([
            "TOTAL".to_string(),
            String::new(),
            format!("{:.2}", self.total_spending.as_f64()),
            format!("{:.2}", self.total_budget.as_f64()),
            String::new(),
        ])?;

        csv_writer
            .flush()
            .map_err(|e| BudgetError::Export(e.to_string()))
    }
}
