//! Category CLI commands

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_list, CategoryListing};
use crate::error::{BudgetError, BudgetResult};
use crate::models::NewCategory;
use crate::services::{BudgetGoalService, CategoryService};
use crate::storage::Storage;

use super::{parse_icon, resolve_category};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their budget and expense count
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Icon name (e.g. "home", "shopping-cart")
        #[arg(short, long)]
        icon: Option<String>,
        /// Color token (e.g. "#cccccc" or "hsl(var(--chart-1))")
        #[arg(short, long)]
        color: Option<String>,
        /// Budget limit (e.g. "300" or "300.00")
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
        /// New budget limit; invalid or negative input clears it
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Delete a category with its budget goal and expenses
    Delete {
        /// Category name or ID
        category: String,
        /// Delete even if expenses are recorded against it
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BudgetResult<()> {
    let service = CategoryService::new(storage);
    let goals = BudgetGoalService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let all_goals = goals.get_budget_goals()?;
            let mut listings = Vec::new();
            for category in service.get_categories()? {
                let limit = all_goals
                    .iter()
                    .find(|g| g.category_id == category.id)
                    .map(|g| g.limit);
                let expense_count = service.expense_count(category.id)?;
                listings.push(CategoryListing {
                    category,
                    limit,
                    expense_count,
                });
            }
            print!("{}", format_category_list(&listings));
        }

        CategoryCommands::Add {
            name,
            icon,
            color,
            limit,
        } => {
            let mut new_category = NewCategory::named(name);
            if let Some(icon) = icon {
                new_category = new_category.with_icon(parse_icon(&icon)?);
            }
            if let Some(color) = color {
                new_category = new_category.with_color(color);
            }

            let category = service.add_category(new_category)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);

            if let Some(limit) = limit {
                let goal = goals.set_limit(category.id, &limit)?;
                println!("  Budget: {}", goal.limit);
            }
        }

        CategoryCommands::Show { category } => {
            let category = resolve_category(&service, &category)?;
            let goal = goals.get_goal_for_category(category.id)?;
            let expense_count = service.expense_count(category.id)?;
            print!(
                "{}",
                format_category_details(&category, goal.as_ref(), expense_count)
            );
        }

        CategoryCommands::Edit {
            category,
            name,
            icon,
            color,
            limit,
        } => {
            let mut category = resolve_category(&service, &category)?;

            if name.is_none() && icon.is_none() && color.is_none() && limit.is_none() {
                println!("No changes specified. Use --name, --icon, --color or --limit.");
                return Ok(());
            }

            let changes_category = name.is_some() || icon.is_some() || color.is_some();
            if let Some(name) = name {
                category.name = name.trim().to_string();
            }
            if let Some(icon) = icon {
                category.icon = parse_icon(&icon)?;
            }
            if let Some(color) = color {
                category.color = color.trim().to_string();
            }

            if changes_category {
                category = service.update_category(category)?;
            }
            println!("Updated category: {}", category.name);

            if let Some(limit) = limit {
                let goal = goals.set_limit(category.id, &limit)?;
                if goal.has_limit() {
                    println!("  Budget: {}", goal.limit);
                } else {
                    println!("  Budget: Not set");
                }
            }
        }

        CategoryCommands::Delete { category, force } => {
            let category = resolve_category(&service, &category)?;
            let expense_count = service.expense_count(category.id)?;

            if expense_count > 0 && !force {
                return Err(BudgetError::Validation(format!(
                    "Category '{}' has {} expense(s). Use --force to delete them too",
                    category.name, expense_count
                )));
            }

            let deletion = service.delete_category(category.id)?;
            println!("Deleted category: {}", deletion.category.name);
            if deletion.removed_expenses > 0 {
                println!("  Removed {} expense(s)", deletion.removed_expenses);
            }
        }
    }

    Ok(())
}
