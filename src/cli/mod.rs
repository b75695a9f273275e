//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod goal;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, CategoryIcon, Money};
use crate::services::CategoryService;

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(input: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse an amount argument
pub(crate) fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::Validation(e.to_string()))
}

pub(crate) fn parse_icon(input: &str) -> BudgetResult<CategoryIcon> {
    input
        .parse()
        .map_err(|e: crate::models::icon::UnknownIcon| BudgetError::Validation(e.to_string()))
}

/// Resolve a category name or ID, failing with NotFound
pub(crate) fn resolve_category(
    service: &CategoryService<'_>,
    identifier: &str,
) -> BudgetResult<Category> {
    service
        .find_category(identifier)?
        .ok_or_else(|| BudgetError::category_not_found(identifier))
}
