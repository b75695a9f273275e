//! Display formatting for terminal output
//!
//! Entity tables and detail views for categories, expenses and budget goals.
//! Report layouts live with their reports.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::format_goal_list;
pub use category::{format_category_details, format_category_list, icon_glyph, CategoryListing};
pub use expense::{format_expense_details, format_expense_list};

/// Shorten a string to `max` characters, ending with "..." when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Rent", 10), "Rent");
        assert_eq!(truncate("Weekly Groceries", 10), "Weekly ...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
