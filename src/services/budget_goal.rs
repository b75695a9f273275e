//! Budget goal service
//!
//! Goals are keyed by category: every category has at most one, and reads
//! backfill a zero-limit goal for categories that lack one.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetGoal, CategoryId, Money};
use crate::storage::Storage;

/// Service for budget goals
pub struct BudgetGoalService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetGoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All goals, after creating a default goal for each category without one
    pub fn get_budget_goals(&self) -> BudgetResult<Vec<BudgetGoal>> {
        self.storage.simulate_read();

        let today = super::today();
        let mut backfilled = Vec::new();

        for category in self.storage.categories.get_all()? {
            if self
                .storage
                .budget_goals
                .get_by_category(category.id)?
                .is_none()
            {
                let goal = BudgetGoal::default_for(category.id, today);
                self.storage.budget_goals.insert(goal.clone())?;
                tracing::debug!(category = %category.name, "default budget goal created");
                backfilled.push((category.name, goal));
            }
        }

        if !backfilled.is_empty() {
            self.storage.save()?;
            for (name, goal) in &backfilled {
                self.storage.log_create(
                    EntityType::BudgetGoal,
                    goal.id.to_string(),
                    Some(name.clone()),
                    goal,
                )?;
            }
        }

        self.storage.budget_goals.get_all()
    }

    /// Insert or replace a goal
    ///
    /// A stored goal for the same category is replaced and keeps its ID.
    /// Otherwise a stored goal with the same ID is replaced, and failing both
    /// the goal is inserted. A negative limit is stored as zero.
    pub fn update_budget_goal(&self, goal: BudgetGoal) -> BudgetResult<BudgetGoal> {
        self.storage.simulate_write();
        self.upsert(goal)
    }

    /// Set a category's limit from user-typed text
    ///
    /// Unparseable or negative input sets the limit to zero. The existing
    /// goal's ID and date range are kept when there is one.
    pub fn set_limit(&self, category_id: CategoryId, raw_limit: &str) -> BudgetResult<BudgetGoal> {
        self.storage.simulate_write();

        let category = self
            .storage
            .categories
            .get(category_id)?
            .ok_or_else(|| BudgetError::category_not_found(category_id.to_string()))?;

        let limit = Money::coerce(raw_limit);
        if limit.is_zero() && !raw_limit.trim().is_empty() && Money::parse(raw_limit).is_err() {
            tracing::warn!(
                category = %category.name,
                input = raw_limit,
                "unparseable budget limit treated as zero"
            );
        }

        let mut goal = match self.storage.budget_goals.get_by_category(category_id)? {
            Some(existing) => existing,
            None => BudgetGoal::default_for(category_id, super::today()),
        };
        goal.limit = limit;

        self.upsert(goal)
    }

    pub fn get_goal_for_category(&self, category_id: CategoryId) -> BudgetResult<Option<BudgetGoal>> {
        self.storage.simulate_read();
        self.storage.budget_goals.get_by_category(category_id)
    }

    fn upsert(&self, mut goal: BudgetGoal) -> BudgetResult<BudgetGoal> {
        if goal.limit.is_negative() {
            tracing::warn!(
                category_id = %goal.category_id,
                limit = %goal.limit,
                "negative budget limit stored as zero"
            );
            goal.limit = Money::zero();
        }

        goal.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let goals = &self.storage.budget_goals;
        let before = match goals.get_by_category(goal.category_id)? {
            Some(existing) => {
                goal.id = existing.id;
                goals.replace(existing.id, goal.clone())?
            }
            None => goals.replace(goal.id, goal.clone())?,
        };

        if before.is_none() {
            goals.insert(goal.clone())?;
        }

        self.storage.save()?;

        let category_name = self
            .storage
            .categories
            .get(goal.category_id)?
            .map(|c| c.name);

        match &before {
            Some(before) => self.storage.log_update(
                EntityType::BudgetGoal,
                goal.id.to_string(),
                category_name,
                before,
                &goal,
                describe_changes(before, &goal),
            )?,
            None => self.storage.log_create(
                EntityType::BudgetGoal,
                goal.id.to_string(),
                category_name,
                &goal,
            )?,
        }

        tracing::info!(
            id = %goal.id,
            category_id = %goal.category_id,
            limit = %goal.limit,
            "budget goal saved"
        );
        Ok(goal)
    }
}

fn describe_changes(before: &BudgetGoal, after: &BudgetGoal) -> Option<String> {
    let mut changes = Vec::new();

    if before.category_id != after.category_id {
        changes.push(format!(
            "category: {} -> {}",
            before.category_id, after.category_id
        ));
    }
    if before.limit != after.limit {
        changes.push(format!("limit: {} -> {}", before.limit, after.limit));
    }
    if before.start_date != after.start_date || before.end_date != after.end_date {
        changes.push(format!(
            "range: {}..{} -> {}..{}",
            before.start_date, before.end_date, after.start_date, after.end_date
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
