//! Core data models for budget-easy
//!
//! Categories, expenses and budget goals, plus the value types they are
//! built from (IDs, money, icons, calendar months).

pub mod budget_goal;
pub mod category;
pub mod expense;
pub mod icon;
pub mod ids;
pub mod money;
pub mod period;

pub use budget_goal::BudgetGoal;
pub use category::{Category, NewCategory};
pub use expense::{Expense, NewExpense};
pub use icon::CategoryIcon;
pub use ids::{BudgetGoalId, CategoryId, ExpenseId};
pub use money::Money;
pub use period::BudgetMonth;
