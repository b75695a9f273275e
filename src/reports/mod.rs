//! Reports for budget-easy
//!
//! Spending by category, progress against budget limits, and the spending
//! pie chart. Every report is computed from the store on demand.

pub mod chart;
pub mod progress;
pub mod spending;

pub use chart::{ChartSegment, LegendEntry, SpendingChart};
pub use progress::{budget_progress, progress_percentage, BudgetProgress, ProgressReport};
pub use spending::{aggregate_spending, SpendingByCategory, SpendingReport};
