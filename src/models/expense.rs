//! Expense model
//!
//! A single spending record tied to one category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// The category this expense counts against
    pub category_id: CategoryId,

    /// Date of the expense
    pub date: NaiveDate,
}

impl Expense {
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.description, self.amount)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.description, self.amount)
    }
}

/// The data needed to record an expense (an expense without its ID)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category_id: CategoryId,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category_id,
            date,
        }
    }

    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            description: self.description.trim().to_string(),
            amount: self.amount,
            category_id: self.category_id,
            date: self.date,
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.description, self.amount)
    }
}

fn validate_fields(description: &str, amount: Money) -> Result<(), ExpenseValidationError> {
    if description.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }

    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }

    Ok(())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
