//! Budget goal display formatting

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetGoal, Category, CategoryId};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "From")]
    start: String,
    #[tabled(rename = "To")]
    end: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format budget goals as a table, listed in category order
pub fn format_goal_list(goals: &[BudgetGoal], categories: &[Category]) -> String {
    if goals.is_empty() {
        return "No budget goals.\n".to_string();
    }

    let position: HashMap<CategoryId, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id, i))
        .collect();

    let mut ordered: Vec<&BudgetGoal> = goals.iter().collect();
    ordered.sort_by_key(|g| position.get(&g.category_id).copied().unwrap_or(usize::MAX));

    let rows = ordered.into_iter().map(|goal| GoalRow {
        category: position
            .get(&goal.category_id)
            .map(|&i| categories[i].name.clone())
            .unwrap_or_else(|| "(unknown)".to_string()),
        limit: if goal.has_limit() {
            goal.limit.to_string()
        } else {
            "Not set".to_string()
        },
        start: goal.start_date.to_string(),
        end: goal.end_date.to_string(),
        id: goal.id.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryIcon, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_goals_follow_category_order() {
        let housing = Category::new("Housing", CategoryIcon::Home, "#00f");
        let travel = Category::new("Travel", CategoryIcon::Plane, "#ff0");
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let mut housing_goal = BudgetGoal::default_for(housing.id, today);
        housing_goal.limit = Money::from_units(1300);
        let travel_goal = BudgetGoal::default_for(travel.id, today);

        let output = format_goal_list(&[travel_goal, housing_goal], &[housing, travel]);

        let housing_at = output.find("Housing").unwrap();
        let travel_at = output.find("Travel").unwrap();
        assert!(housing_at < travel_at);
        assert!(output.contains("$1300.00"));
        assert!(output.contains("Not set"));
        assert!(output.contains("2024-06-30"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_goal_list(&[], &[]), "No budget goals.\n");
    }
}
