//! Expense display formatting

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryId, Expense, Money};

use super::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format expenses as a table, in the order given
///
/// Expenses whose category is missing show "(unknown)".
pub fn format_expense_list(
    expenses: &[Expense],
    categories: &[Category],
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let rows = expenses.iter().map(|expense| ExpenseRow {
        date: expense.date.format(date_format).to_string(),
        description: truncate(&expense.description, 40),
        category: names
            .get(&expense.category_id)
            .copied()
            .unwrap_or("(unknown)")
            .to_string(),
        amount: expense.amount.to_string(),
        id: expense.id.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!("{}\n{} expenses, {} total\n", table, expenses.len(), total)
}

/// Format expense details
pub fn format_expense_details(expense: &Expense, category_name: Option<&str>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  Description: {}\n", expense.description));
    output.push_str(&format!("  Amount:      {}\n", expense.amount));
    output.push_str(&format!("  Date:        {}\n", expense.date));
    output.push_str(&format!(
        "  Category:    {}\n",
        category_name.unwrap_or("(unknown)")
    ));

    output
}
