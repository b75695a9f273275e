//! Budget goal CLI commands

use clap::Subcommand;

use crate::display::budget::format_goal_list;
use crate::error::BudgetResult;
use crate::models::{BudgetGoal, Money};
use crate::services::{today, BudgetGoalService, CategoryService};
use crate::storage::Storage;

use super::{parse_date, resolve_category};

/// Budget goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List the budget goal of every category
    List,

    /// Set a category's budget limit
    Set {
        /// Category name or ID
        category: String,
        /// Limit amount (e.g. "400"); "0" or invalid input clears the limit
        #[arg(allow_hyphen_values = true)]
        limit: String,
        /// First day the goal covers (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Last day the goal covers (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle a budget goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> BudgetResult<()> {
    let service = BudgetGoalService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        GoalCommands::List => {
            let goals = service.get_budget_goals()?;
            print!(
                "{}",
                format_goal_list(&goals, &categories.get_categories()?)
            );
        }

        GoalCommands::Set {
            category,
            limit,
            from,
            to,
        } => {
            let category = resolve_category(&categories, &category)?;

            let goal = if from.is_none() && to.is_none() {
                service.set_limit(category.id, &limit)?
            } else {
                let mut goal = service
                    .get_goal_for_category(category.id)?
                    .unwrap_or_else(|| BudgetGoal::default_for(category.id, today()));
                goal.limit = Money::coerce(&limit);
                if let Some(from) = from {
                    goal.start_date = parse_date(&from)?;
                }
                if let Some(to) = to {
                    goal.end_date = parse_date(&to)?;
                }
                service.update_budget_goal(goal)?
            };

            if goal.has_limit() {
                println!("Budget for {} set to {}", category.name, goal.limit);
            } else {
                println!("Budget for {} cleared", category.name);
            }
            println!("  Period: {} to {}", goal.start_date, goal.end_date);
        }
    }

    Ok(())
}
