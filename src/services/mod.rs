//! Service layer for budget-easy
//!
//! Services hold a reference to the `Storage` and carry the business rules:
//! validation, default budget goals, cascade deletes and goal upserts. Every
//! operation passes the store's simulated latency first, then persists and
//! audits its changes.

pub mod budget_goal;
pub mod category;
pub mod expense;
pub mod spending;

pub use budget_goal::BudgetGoalService;
pub use category::{CategoryDeletion, CategoryService};
pub use expense::ExpenseService;
pub use spending::SpendingService;

use chrono::NaiveDate;

/// Local calendar date, used for default goal ranges
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
