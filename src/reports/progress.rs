//! Budget progress
//!
//! Per-category progress against a budget limit, the data behind the
//! dashboard progress bars.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{CategoryId, Money};
use crate::storage::Storage;

use super::spending::{SpendingByCategory, SpendingReport};

/// Width of the text progress bar, in characters
pub const BAR_WIDTH: usize = 20;

/// Percentage of `limit` used by `spent`, clamped to `[0, 100]`
///
/// Zero when there is no positive limit.
pub fn progress_percentage(spent: Money, limit: Money) -> f64 {
    if !limit.is_positive() {
        return 0.0;
    }
    spent.percent_of(limit).clamp(0.0, 100.0)
}

/// Progress of one category against its limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub spent: Money,
    pub limit: Money,
}

impl BudgetProgress {
    /// Build from a spending row; a missing limit counts as zero
    pub fn from_spending(row: &SpendingByCategory) -> Self {
        Self {
            category_id: row.category_id,
            name: row.name.clone(),
            color: row.color.clone(),
            spent: row.total_spending,
            limit: row.limit_or_zero(),
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        progress_percentage(self.spent, self.limit)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Limit minus spending; negative when over budget
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Spending beyond the limit; only meaningful when over budget
    pub fn over_amount(&self) -> Money {
        self.spent - self.limit
    }

    /// "$X over" or "$X left"
    pub fn status_label(&self) -> String {
        if self.is_over_budget() {
            format!("{} over", self.over_amount())
        } else {
            format!("{} left", self.remaining())
        }
    }

    /// "$X spent of $Y"
    pub fn spent_label(&self) -> String {
        format!("{} spent of {}", self.spent, self.limit)
    }

    /// Text bar such as `[#####---------------]`
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.progress_percentage() / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

/// Progress rows for the categories that have a positive limit
pub fn budget_progress(rows: &[SpendingByCategory]) -> Vec<BudgetProgress> {
    rows.iter()
        .filter(|row| row.limit_or_zero().is_positive())
        .map(BudgetProgress::from_spending)
        .collect()
}

/// Progress report for every category with a limit
#[derive(Debug, Clone)]
pub struct ProgressReport {
    pub rows: Vec<BudgetProgress>,
}

impl ProgressReport {
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let spending = SpendingReport::generate(storage)?;
        Ok(Self::from_spending(&spending.rows))
    }

    pub fn from_spending(rows: &[SpendingByCategory]) -> Self {
        Self {
            rows: budget_progress(rows),
        }
    }

    /// Categories currently over their limit
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetProgress> {
        self.rows.iter().filter(|r| r.is_over_budget())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Budget Progress\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budget goals set. Set limits to track progress.\n");
            return output;
        }

        for row in &self.rows {
            let marker = if row.is_over_budget() { "!" } else { " " };
            output.push_str(&format!(
                "{}{:<28} {} {:>5.1}%  {}\n",
                marker,
                row.name,
                row.bar(BAR_WIDTH),
                row.progress_percentage(),
                row.status_label()
            ));
            output.push_str(&format!("  {}\n", row.spent_label()));
        }

        let over = self.over_budget().count();
        if over > 0 {
            output.push('\n');
            let noun = if over == 1 { "category" } else { "categories" };
            output.push_str(&format!("{} {} over budget\n", over, noun));
        }

        output
    }
}
