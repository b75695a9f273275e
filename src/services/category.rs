//! Category service
//!
//! Creating a category also gives it a zero-limit budget goal; deleting one
//! removes its goal and every expense recorded against it.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetGoal, Category, CategoryId, NewCategory};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Everything removed by a category delete
#[derive(Debug, Clone)]
pub struct CategoryDeletion {
    pub category: Category,
    pub goal: Option<BudgetGoal>,
    pub removed_expenses: usize,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a category and its default budget goal
    pub fn add_category(&self, new_category: NewCategory) -> BudgetResult<Category> {
        self.storage.simulate_write();

        new_category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let category = new_category.into_category(CategoryId::new());
        self.storage.categories.insert(category.clone())?;

        let default_goal = match self.storage.budget_goals.get_by_category(category.id)? {
            Some(_) => None,
            None => {
                let goal = BudgetGoal::default_for(category.id, super::today());
                self.storage.budget_goals.insert(goal.clone())?;
                Some(goal)
            }
        };

        self.storage.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;
        if let Some(goal) = &default_goal {
            self.storage.log_create(
                EntityType::BudgetGoal,
                goal.id.to_string(),
                Some(category.name.clone()),
                goal,
            )?;
        }

        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Replace a stored category
    pub fn update_category(&self, category: Category) -> BudgetResult<Category> {
        self.storage.simulate_write();

        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let before = self
            .storage
            .categories
            .replace(category.clone())?
            .ok_or_else(|| BudgetError::category_not_found(category.id.to_string()))?;

        self.storage.save()?;

        self.storage.log_update(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &before,
            &category,
            describe_changes(&before, &category),
        )?;

        tracing::info!(id = %category.id, name = %category.name, "category updated");
        Ok(category)
    }

    /// Delete a category together with its budget goal and expenses
    pub fn delete_category(&self, id: CategoryId) -> BudgetResult<CategoryDeletion> {
        self.storage.simulate_write();

        let category = self
            .storage
            .categories
            .remove(id)?
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

        let goal = self.storage.budget_goals.remove_by_category(id)?;
        let expenses = self.storage.expenses.remove_by_category(id)?;

        self.storage.save()?;

        self.storage.log_delete(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;
        if let Some(goal) = &goal {
            self.storage.log_delete(
                EntityType::BudgetGoal,
                goal.id.to_string(),
                Some(category.name.clone()),
                goal,
            )?;
        }
        for expense in &expenses {
            self.storage.log_delete(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.description.clone()),
                expense,
            )?;
        }

        tracing::info!(
            id = %category.id,
            name = %category.name,
            removed_expenses = expenses.len(),
            "category deleted"
        );

        Ok(CategoryDeletion {
            category,
            goal,
            removed_expenses: expenses.len(),
        })
    }

    /// All categories in insertion order
    pub fn get_categories(&self) -> BudgetResult<Vec<Category>> {
        self.storage.simulate_read();
        self.storage.categories.get_all()
    }

    pub fn get_category(&self, id: CategoryId) -> BudgetResult<Option<Category>> {
        self.storage.simulate_read();
        self.storage.categories.get(id)
    }

    /// Find a category by name (case-insensitive), full ID or short ID
    pub fn find_category(&self, identifier: &str) -> BudgetResult<Option<Category>> {
        self.storage.simulate_read();
        self.storage.categories.find(identifier)
    }

    /// Number of expenses recorded against a category
    pub fn expense_count(&self, id: CategoryId) -> BudgetResult<usize> {
        self.storage.expenses.count_for_category(id)
    }
}

fn describe_changes(before: &Category, after: &Category) -> Option<String> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(format!("name: {} -> {}", before.name, after.name));
    }
    if before.icon != after.icon {
        changes.push(format!("icon: {} -> {}", before.icon, after.icon));
    }
    if before.color != after.color {
        changes.push(format!("color: {} -> {}", before.color, after.color));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{BudgetPaths, LatencySettings, Settings};
    use crate::models::{BudgetMonth, CategoryIcon, Money, NewExpense};
    use crate::services::ExpenseService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn add_expense(storage: &Storage, category_id: CategoryId, dollars: i64) {
        let expense = NewExpense::new("Test", Money::from_units(dollars), category_id, june(1))
            .into_expense(Default::default());
        storage.expenses.insert(expense).unwrap();
    }

    #[test]
    fn test_add_category_creates_default_goal() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);

        let category = service
            .add_category(NewCategory::named("  Groceries ").with_icon(CategoryIcon::ShoppingCart))
            .unwrap();

        assert_eq!(category.name, "Groceries");
        assert_eq!(category.color, "#cccccc");

        let goal = storage
            .budget_goals
            .get_by_category(category.id)
            .unwrap()
            .unwrap();
        let month = BudgetMonth::current();
        assert!(goal.limit.is_zero());
        assert_eq!(goal.start_date, month.start_date());
        assert_eq!(goal.end_date, month.end_date());
    }

    #[test]
    fn test_add_category_rejects_blank_name() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);

        let err = service.add_category(NewCategory::named("   ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.categories.count().unwrap(), 0);
    }

    #[test]
    fn test_update_category() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);
        let mut category = service.add_category(NewCategory::named("Food")).unwrap();

        category.name = "Food & Dining".into();
        category.icon = CategoryIcon::Utensils;
        service.update_category(category.clone()).unwrap();

        let stored = service.get_category(category.id).unwrap().unwrap();
        assert_eq!(stored.name, "Food & Dining");
        assert_eq!(stored.icon, CategoryIcon::Utensils);
    }

    #[test]
    fn test_update_missing_category_is_not_found() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);

        let err = service
            .update_category(Category::new("Ghost", CategoryIcon::Tag, "#000"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_category_cascades() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);
        let food = service.add_category(NewCategory::named("Food")).unwrap();
        let travel = service.add_category(NewCategory::named("Travel")).unwrap();

        add_expense(&storage, food.id, 30);
        add_expense(&storage, food.id, 20);
        add_expense(&storage, travel.id, 350);

        let deletion = service.delete_category(food.id).unwrap();
        assert_eq!(deletion.category.id, food.id);
        assert_eq!(deletion.removed_expenses, 2);
        assert!(deletion.goal.is_some());

        assert!(service.get_category(food.id).unwrap().is_none());
        assert!(storage.budget_goals.get_by_category(food.id).unwrap().is_none());
        assert_eq!(storage.expenses.count_for_category(food.id).unwrap(), 0);
        assert_eq!(service.expense_count(travel.id).unwrap(), 1);
    }

    #[test]
    fn test_delete_missing_category_is_not_found() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);

        let err = service.delete_category(CategoryId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_categories_keeps_insertion_order() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);
        for name in ["Housing", "Food", "Travel"] {
            service.add_category(NewCategory::named(name)).unwrap();
        }

        let names: Vec<_> = service
            .get_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Housing", "Food", "Travel"]);
    }

    #[test]
    fn test_find_category() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);
        let travel = service.add_category(NewCategory::named("Travel")).unwrap();

        assert!(service.find_category("TRAVEL").unwrap().is_some());
        assert!(service.find_category(&travel.id.to_string()).unwrap().is_some());
        assert!(service.find_category("Rent").unwrap().is_none());
    }

    fn audited_storage(temp_dir: &TempDir) -> Storage {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            latency: LatencySettings::none(),
            ..Settings::default()
        };
        Storage::open(&paths, &settings).unwrap()
    }

    #[test]
    fn test_add_category_audits_category_and_goal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = audited_storage(&temp_dir);

        let pets = CategoryService::new(&storage)
            .add_category(NewCategory::named("Pets"))
            .unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        let logged: Vec<_> = entries
            .iter()
            .map(|e| (e.operation, e.entity_type))
            .collect();
        assert_eq!(
            logged,
            vec![
                (Operation::Create, EntityType::Category),
                (Operation::Create, EntityType::BudgetGoal),
            ]
        );
        assert_eq!(entries[0].entity_id, pets.id.to_string());
        assert_eq!(entries[1].entity_name.as_deref(), Some("Pets"));
    }

    #[test]
    fn test_delete_category_audits_cascade() {
        let temp_dir = TempDir::new().unwrap();
        let storage = audited_storage(&temp_dir);
        let service = CategoryService::new(&storage);
        let food = service.add_category(NewCategory::named("Food")).unwrap();

        let expenses = ExpenseService::new(&storage);
        let lunch = expenses
            .add_expense(NewExpense::new("Lunch", Money::from_units(30), food.id, june(1)))
            .unwrap();
        let dinner = expenses
            .add_expense(NewExpense::new("Dinner", Money::from_units(20), food.id, june(2)))
            .unwrap();
        let goal = storage.budget_goals.get_by_category(food.id).unwrap().unwrap();

        service.delete_category(food.id).unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        let deletes: Vec<_> = entries
            .iter()
            .filter(|e| e.operation == Operation::Delete)
            .map(|e| (e.entity_type, e.entity_id.clone()))
            .collect();
        assert_eq!(
            deletes,
            vec![
                (EntityType::Category, food.id.to_string()),
                (EntityType::BudgetGoal, goal.id.to_string()),
                (EntityType::Expense, lunch.id.to_string()),
                (EntityType::Expense, dinner.id.to_string()),
            ]
        );
        assert!(entries
            .iter()
            .filter(|e| e.operation == Operation::Delete)
            .all(|e| e.before.is_some() && e.after.is_none()));
    }

    #[test]
    fn test_update_category_audits_changes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = audited_storage(&temp_dir);
        let service = CategoryService::new(&storage);
        let mut category = service.add_category(NewCategory::named("Food")).unwrap();

        category.name = "Dining".into();
        service.update_category(category).unwrap();

        let entries = storage.audit_logger().unwrap().read_recent(1).unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].changes.as_deref(), Some("name: Food -> Dining"));
    }

    #[test]
    fn test_change_description() {
        let before = Category::new("Food", CategoryIcon::Tag, "#cccccc");
        let mut after = before.clone();
        assert!(describe_changes(&before, &after).is_none());

        after.name = "Dining".into();
        after.color = "#ff0000".into();
        assert_eq!(
            describe_changes(&before, &after).unwrap(),
            "name: Food -> Dining, color: #cccccc -> #ff0000"
        );
    }
}
