//! Demo dataset
//!
//! Ten categories, eighteen expenses and seven budget goals describing one
//! month of household spending. Categories without a goal (Travel, Education,
//! Gifts & Donations) get a default zero-limit goal on the next goal read.

use crate::error::BudgetError;
use crate::models::{
    BudgetGoal, BudgetGoalId, BudgetMonth, Category, CategoryIcon, Expense, ExpenseId, Money,
};

use super::Storage;

/// (name, icon, color)
const DEMO_CATEGORIES: [(&str, CategoryIcon, &str); 10] = [
    ("Housing", CategoryIcon::Home, "hsl(var(--chart-3))"),
    ("Food & Dining", CategoryIcon::Utensils, "hsl(var(--chart-4))"),
    ("Transportation", CategoryIcon::Car, "hsl(var(--chart-5))"),
    ("Groceries", CategoryIcon::ShoppingCart, "hsl(var(--chart-2))"),
    ("Entertainment", CategoryIcon::Film, "hsl(330, 76%, 61%)"),
    ("Clothing", CategoryIcon::Shirt, "hsl(var(--chart-1))"),
    ("Health & Wellness", CategoryIcon::HeartPulse, "hsl(var(--destructive))"),
    ("Travel", CategoryIcon::Plane, "hsl(48, 96%, 51%)"),
    ("Education", CategoryIcon::BookOpen, "hsl(260, 50%, 60%)"),
    ("Gifts & Donations", CategoryIcon::Gift, "hsl(0, 0%, 50%)"),
];

/// (description, whole dollars, day of month, index into DEMO_CATEGORIES)
const DEMO_EXPENSES: [(&str, i64, u32, usize); 18] = [
    ("Rent Payment", 1200, 1, 0),
    ("Electricity Bill", 75, 15, 0),
    ("Dinner Out", 60, 5, 1),
    ("Lunch Meeting", 35, 12, 1),
    ("Coffee Shop", 15, 20, 1),
    ("Gas Fill-up", 50, 8, 2),
    ("Bus Fare", 20, 18, 2),
    ("Weekly Groceries", 150, 3, 3),
    ("Snacks", 25, 10, 3),
    ("Bulk Buy", 200, 25, 3),
    ("Movie Tickets", 30, 7, 4),
    ("Concert", 100, 22, 4),
    ("New Shirt", 45, 14, 5),
    ("Gym Membership", 40, 1, 6),
    ("Pharmacy", 20, 19, 6),
    ("Flight Booking", 350, 11, 7),
    ("Online Course", 99, 6, 8),
    ("Birthday Gift", 50, 28, 9),
];

/// (index into DEMO_CATEGORIES, whole-dollar limit)
const DEMO_GOALS: [(usize, i64); 7] = [
    (0, 1300),
    (1, 300),
    (2, 150),
    (3, 400),
    (4, 150),
    (5, 100),
    (6, 100),
];

/// Counts of what the seed inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub expenses: usize,
    pub budget_goals: usize,
}

/// Fill an empty store with the demo dataset, dated inside `month`
///
/// Fails with a validation error if the store already holds data. The store
/// is saved afterwards.
pub fn seed_demo_data(storage: &Storage, month: BudgetMonth) -> Result<SeedSummary, BudgetError> {
    if !storage.is_empty()? {
        return Err(BudgetError::Validation(
            "Demo data can only be loaded into an empty store".into(),
        ));
    }

    let categories: Vec<Category> = DEMO_CATEGORIES
        .iter()
        .map(|(name, icon, color)| Category::new(*name, *icon, *color))
        .collect();

    for category in &categories {
        storage.categories.insert(category.clone())?;
    }

    for (description, dollars, day, category_index) in DEMO_EXPENSES {
        storage.expenses.insert(Expense {
            id: ExpenseId::new(),
            description: description.to_string(),
            amount: Money::from_units(dollars),
            category_id: categories[category_index].id,
            date: month.day(day),
        })?;
    }

    for (category_index, dollars) in DEMO_GOALS {
        storage.budget_goals.insert(BudgetGoal {
            id: BudgetGoalId::new(),
            category_id: categories[category_index].id,
            limit: Money::from_units(dollars),
            start_date: month.start_date(),
            end_date: month.end_date(),
        })?;
    }

    storage.save()?;

    let summary = SeedSummary {
        categories: DEMO_CATEGORIES.len(),
        expenses: DEMO_EXPENSES.len(),
        budget_goals: DEMO_GOALS.len(),
    };
    tracing::info!(
        month = %month,
        categories = summary.categories,
        expenses = summary.expenses,
        budget_goals = summary.budget_goals,
        "demo data loaded"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june() -> BudgetMonth {
        BudgetMonth::new(2024, 6).unwrap()
    }

    #[test]
    fn test_seed_counts() {
        let storage = Storage::in_memory();
        let summary = seed_demo_data(&storage, june()).unwrap();

        assert_eq!(summary.categories, 10);
        assert_eq!(storage.categories.count().unwrap(), 10);
        assert_eq!(storage.expenses.count().unwrap(), 18);
        assert_eq!(storage.budget_goals.count().unwrap(), 7);
    }

    #[test]
    fn test_seed_dates_fall_in_month() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage, june()).unwrap();

        for expense in storage.expenses.get_all().unwrap() {
            assert!(june().contains(expense.date), "{}", expense);
        }
        for goal in storage.budget_goals.get_all().unwrap() {
            assert_eq!(goal.start_date, june().start_date());
            assert_eq!(goal.end_date, june().end_date());
        }
    }

    #[test]
    fn test_seed_housing_total() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage, june()).unwrap();

        let housing = storage.categories.find("Housing").unwrap().unwrap();
        let total: Money = storage
            .expenses
            .get_by_category(housing.id)
            .unwrap()
            .into_iter()
            .map(|e| e.amount)
            .sum();
        assert_eq!(total, Money::from_units(1275));
    }

    #[test]
    fn test_seed_refuses_non_empty_store() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage, june()).unwrap();

        let err = seed_demo_data(&storage, june()).unwrap_err();
        assert!(err.is_validation());
    }
}
