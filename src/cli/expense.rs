//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::format_expense_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::NewExpense;
use crate::services::{today, CategoryService, ExpenseService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, resolve_category};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses, newest first
    List {
        /// Only expenses in this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Record an expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "12.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        expense: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let category_id = match category {
                Some(identifier) => Some(resolve_category(&categories, &identifier)?.id),
                None => None,
            };

            let mut expenses: Vec<_> = service
                .list_recent_first()?
                .into_iter()
                .filter(|e| category_id.map_or(true, |id| e.category_id == id))
                .filter(|e| from.map_or(true, |from| e.date >= from))
                .filter(|e| to.map_or(true, |to| e.date <= to))
                .collect();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!(
                "{}",
                format_expense_list(
                    &expenses,
                    &categories.get_categories()?,
                    &settings.date_format
                )
            );
        }

        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let category = resolve_category(&categories, &category)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => today(),
            };

            let expense =
                service.add_expense(NewExpense::new(description, amount, category.id, date))?;
            println!(
                "Recorded {} for {} in {}",
                expense.amount, expense.description, category.name
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::Edit {
            expense,
            description,
            amount,
            category,
            date,
        } => {
            let mut stored = service
                .find_expense(&expense)?
                .ok_or_else(|| BudgetError::expense_not_found(&expense))?;

            if let Some(description) = description {
                stored.description = description.trim().to_string();
            }
            if let Some(amount) = amount {
                stored.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                stored.category_id = resolve_category(&categories, &category)?.id;
            }
            if let Some(date) = date {
                stored.date = parse_date(&date)?;
            }

            let updated = service.update_expense(stored)?;
            println!("Updated expense: {}", updated);
        }

        ExpenseCommands::Delete { expense } => {
            let stored = service
                .find_expense(&expense)?
                .ok_or_else(|| BudgetError::expense_not_found(&expense))?;

            let removed = service.delete_expense(stored.id)?;
            println!("Deleted expense: {}", removed);
        }
    }

    Ok(())
}
