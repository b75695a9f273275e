//! Category repository
//!
//! Categories are kept in insertion order; that order is the display order
//! for every list, report and chart.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BudgetError;
use crate::models::{Category, CategoryId};

/// In-memory category collection
#[derive(Debug, Default)]
pub struct CategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Category>>, BudgetError> {
        self.categories
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Category>>, BudgetError> {
        self.categories
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, BudgetError> {
        Ok(self.read()?.iter().find(|c| c.id == id).cloned())
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, BudgetError> {
        Ok(self.read()?.clone())
    }

    /// Look up a category by name (case-insensitive) or by ID
    pub fn find(&self, identifier: &str) -> Result<Option<Category>, BudgetError> {
        let categories = self.read()?;
        let wanted = identifier.trim().to_lowercase();

        if let Some(category) = categories.iter().find(|c| c.name.to_lowercase() == wanted) {
            return Ok(Some(category.clone()));
        }

        Ok(categories.iter().find(|c| c.id.matches(identifier)).cloned())
    }

    pub fn contains(&self, id: CategoryId) -> Result<bool, BudgetError> {
        Ok(self.read()?.iter().any(|c| c.id == id))
    }

    /// Append a category
    pub fn insert(&self, category: Category) -> Result<(), BudgetError> {
        self.write()?.push(category);
        Ok(())
    }

    /// Replace the category with the same ID, returning the previous value
    pub fn replace(&self, category: Category) -> Result<Option<Category>, BudgetError> {
        let mut categories = self.write()?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => Ok(Some(std::mem::replace(slot, category))),
            None => Ok(None),
        }
    }

    /// Remove a category, returning it if it existed
    pub fn remove(&self, id: CategoryId) -> Result<Option<Category>, BudgetError> {
        let mut categories = self.write()?;
        Ok(categories
            .iter()
            .position(|c| c.id == id)
            .map(|index| categories.remove(index)))
    }

    pub fn count(&self) -> Result<usize, BudgetError> {
        Ok(self.read()?.len())
    }

    /// Replace the whole collection (snapshot restore)
    pub fn replace_all(&self, categories: Vec<Category>) -> Result<(), BudgetError> {
        *self.write()? = categories;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryIcon;

    fn category(name: &str) -> Category {
        Category::new(name, CategoryIcon::Tag, "#cccccc")
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let repo = CategoryRepository::new();
        for name in ["Travel", "Housing", "Gifts"] {
            repo.insert(category(name)).unwrap();
        }

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Travel", "Housing", "Gifts"]);
    }

    #[test]
    fn test_find_by_name_and_id() {
        let repo = CategoryRepository::new();
        let groceries = category("Groceries");
        repo.insert(groceries.clone()).unwrap();

        assert_eq!(repo.find("groceries").unwrap().unwrap().id, groceries.id);
        assert_eq!(
            repo.find(&groceries.id.to_string()).unwrap().unwrap().id,
            groceries.id
        );
        assert!(repo.find("Rent").unwrap().is_none());
    }

    #[test]
    fn test_replace_returns_previous() {
        let repo = CategoryRepository::new();
        let mut food = category("Food");
        repo.insert(food.clone()).unwrap();

        food.name = "Food & Dining".into();
        let previous = repo.replace(food.clone()).unwrap().unwrap();
        assert_eq!(previous.name, "Food");
        assert_eq!(repo.get(food.id).unwrap().unwrap().name, "Food & Dining");

        assert!(repo.replace(category("Ghost")).unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let repo = CategoryRepository::new();
        let a = category("A");
        let b = category("B");
        repo.insert(a.clone()).unwrap();
        repo.insert(b.clone()).unwrap();

        assert_eq!(repo.remove(a.id).unwrap().unwrap().name, "A");
        assert!(repo.remove(a.id).unwrap().is_none());
        assert!(!repo.contains(a.id).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }
}
