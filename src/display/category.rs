//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetGoal, Category, CategoryIcon, Money};

/// Terminal glyph for a category icon
pub fn icon_glyph(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::Home => "🏠",
        CategoryIcon::Utensils => "🍴",
        CategoryIcon::Car => "🚗",
        CategoryIcon::ShoppingCart => "🛒",
        CategoryIcon::Film => "🎬",
        CategoryIcon::Shirt => "👕",
        CategoryIcon::HeartPulse => "💓",
        CategoryIcon::Plane => "✈",
        CategoryIcon::BookOpen => "📖",
        CategoryIcon::Gift => "🎁",
        CategoryIcon::PlusCircle => "⊕",
        CategoryIcon::Tag => "🏷",
    }
}

/// A category with the figures shown next to it in the list
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub category: Category,
    pub limit: Option<Money>,
    pub expense_count: usize,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Expenses")]
    expenses: usize,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "ID")]
    id: String,
}

fn budget_text(limit: Option<Money>) -> String {
    match limit {
        Some(limit) if limit.is_positive() => format!("Budget: {}", limit),
        _ => "Not set".to_string(),
    }
}

/// Format categories as a table
pub fn format_category_list(listings: &[CategoryListing]) -> String {
    if listings.is_empty() {
        return "No categories yet. Add one with 'budget-easy category add'.\n".to_string();
    }

    let rows = listings.iter().map(|listing| CategoryRow {
        icon: icon_glyph(listing.category.icon),
        name: listing.category.name.clone(),
        budget: budget_text(listing.limit),
        expenses: listing.expense_count,
        color: listing.category.color.clone(),
        id: listing.category.id.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format category details
pub fn format_category_details(
    category: &Category,
    goal: Option<&BudgetGoal>,
    expense_count: usize,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Category: {} {}\n",
        icon_glyph(category.icon),
        category.name
    ));
    output.push_str(&format!("  ID:       {}\n", category.id));
    output.push_str(&format!("  Icon:     {}\n", category.icon));
    output.push_str(&format!("  Color:    {}\n", category.color));
    let limit = goal
        .filter(|g| g.has_limit())
        .map(|g| g.limit.to_string())
        .unwrap_or_else(|| "Not set".to_string());
    output.push_str(&format!("  Budget:   {}\n", limit));

    if let Some(goal) = goal {
        output.push_str(&format!(
            "  Period:   {} to {}\n",
            goal.start_date, goal.end_date
        ));
    }

    output.push_str(&format!(
        "  Expenses: {} expense{}\n",
        expense_count,
        if expense_count == 1 { "" } else { "s" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing(name: &str, limit: Option<i64>, expense_count: usize) -> CategoryListing {
        CategoryListing {
            category: Category::new(name, CategoryIcon::Home, "hsl(var(--chart-3))"),
            limit: limit.map(Money::from_units),
            expense_count,
        }
    }

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in CategoryIcon::all() {
            assert!(!icon_glyph(*icon).is_empty());
        }
    }

    #[test]
    fn test_category_list() {
        let output = format_category_list(&[
            listing("Housing", Some(1300), 2),
            listing("Travel", None, 1),
            listing("Pets", Some(0), 0),
        ]);

        assert!(output.contains("Housing"));
        assert!(output.contains("Budget: $1300.00"));
        assert_eq!(output.matches("Not set").count(), 2);
    }

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[]).contains("No categories yet"));
    }

    #[test]
    fn test_details() {
        let category = Category::new("Housing", CategoryIcon::Home, "hsl(var(--chart-3))");
        let goal = BudgetGoal {
            id: Default::default(),
            category_id: category.id,
            limit: Money::from_units(1300),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };

        let output = format_category_details(&category, Some(&goal), 1);
        assert!(output.contains("Budget:   $1300.00\n"));
        assert!(output.contains("2024-06-01 to 2024-06-30"));
        assert!(output.contains("1 expense\n"));
    }
}
