//! Budget goal model
//!
//! A spending ceiling for one category over a date range. Each category has
//! at most one goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetGoalId, CategoryId};
use super::money::Money;
use super::period::BudgetMonth;

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetGoal {
    /// Unique identifier
    pub id: BudgetGoalId,

    /// The category this goal limits (at most one goal per category)
    pub category_id: CategoryId,

    /// Spending limit; zero means "not set"
    pub limit: Money,

    /// First day the goal covers
    pub start_date: NaiveDate,

    /// Last day the goal covers
    pub end_date: NaiveDate,
}

impl BudgetGoal {
    /// A zero-limit goal covering the calendar month that contains `today`
    pub fn default_for(category_id: CategoryId, today: NaiveDate) -> Self {
        let month = BudgetMonth::containing(today);
        Self {
            id: BudgetGoalId::new(),
            category_id,
            limit: Money::zero(),
            start_date: month.start_date(),
            end_date: month.end_date(),
        }
    }

    /// Whether a limit has been set
    pub fn has_limit(&self) -> bool {
        self.limit.is_positive()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    pub fn validate(&self) -> Result<(), BudgetGoalValidationError> {
        if self.limit.is_negative() {
            return Err(BudgetGoalValidationError::NegativeLimit(self.limit));
        }

        if self.end_date < self.start_date {
            return Err(BudgetGoalValidationError::InvertedRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(())
    }
}

impl fmt::Display for BudgetGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "limit {} ({} to {})",
            self.limit, self.start_date, self.end_date
        )
    }
}

/// Validation errors for budget goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetGoalValidationError {
    NegativeLimit(Money),
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for BudgetGoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit(limit) => write!(f, "Budget limit cannot be negative ({})", limit),
            Self::InvertedRange { start, end } => {
                write!(f, "Budget goal ends ({}) before it starts ({})", end, start)
            }
        }
    }
}

impl std::error::Error for BudgetGoalValidationError {}
