//! budget-easy - personal budget tracking
//!
//! Categories, expenses and per-category budget limits, with spending rolled
//! up by category and compared against each limit.
//!
//! # Architecture
//!
//! - `config`: Data directory and settings
//! - `error`: Error types
//! - `models`: Categories, expenses, budget goals and value types
//! - `storage`: Entity collections and JSON snapshot persistence
//! - `services`: CRUD operations and business rules
//! - `reports`: Spending aggregation, budget progress and chart data
//! - `display`: Terminal tables and detail views
//! - `audit`: Audit log of every change
//! - `cli`: Command handlers for the `budget-easy` binary
//!
//! # Example
//!
//! ```rust
//! use budget_easy::models::{Money, NewCategory, NewExpense};
//! use budget_easy::reports::SpendingReport;
//! use budget_easy::services::{BudgetGoalService, CategoryService, ExpenseService};
//! use budget_easy::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let food = CategoryService::new(&storage)
//!     .add_category(NewCategory::named("Food"))
//!     .unwrap();
//! BudgetGoalService::new(&storage).set_limit(food.id, "40").unwrap();
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! ExpenseService::new(&storage)
//!     .add_expense(NewExpense::new("Lunch", Money::from_units(50), food.id, date))
//!     .unwrap();
//!
//! let report = SpendingReport::generate(&storage).unwrap();
//! assert_eq!(report.rows[0].total_spending, Money::from_units(50));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
