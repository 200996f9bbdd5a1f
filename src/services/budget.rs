//! Budget service
//!
//! One budget per month. Saving a budget for a month replaces whatever was
//! there; the audit log records the replacement as an update with a diff.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money, MonthPeriod};
use crate::reports::active_budget;
use crate::storage::Storage;

/// Service for monthly budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a budget, replacing the one for its month
    pub fn save(&self, mut budget: Budget) -> LedgerResult<Budget> {
        budget
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        budget.updated_at = chrono::Utc::now();

        let previous = self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        let id = budget.month.to_string();
        let label = Some(budget.month.label());
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                id,
                label,
                &before,
                &budget,
            )?,
            None => self
                .storage
                .log_create(EntityType::Budget, id, label, &budget)?,
        }

        Ok(budget)
    }

    /// Set expected income and savings target, keeping any category limits
    pub fn set_amounts(
        &self,
        period: MonthPeriod,
        expected_income: Money,
        savings_target: Money,
    ) -> LedgerResult<Budget> {
        let mut budget = self.get_or_zero(period)?;
        budget.expected_income = expected_income;
        budget.savings_target = savings_target;
        self.save(budget)
    }

    /// Set (or replace) one category limit for the month
    pub fn set_limit(&self, period: MonthPeriod, category: &str, limit: Money) -> LedgerResult<Budget> {
        let mut budget = self.get_or_zero(period)?;
        budget.set_limit(category.trim(), limit);
        self.save(budget)
    }

    /// Remove one category limit from the month's budget
    pub fn remove_limit(&self, period: MonthPeriod, category: &str) -> LedgerResult<Budget> {
        let mut budget = self
            .get(period)?
            .ok_or_else(|| LedgerError::budget_not_found(period.to_string()))?;

        if !budget.remove_limit(category.trim()) {
            return Err(LedgerError::NotFound {
                entity_type: "Category limit",
                identifier: category.to_string(),
            });
        }
        self.save(budget)
    }

    pub fn get(&self, period: MonthPeriod) -> LedgerResult<Option<Budget>> {
        self.storage.budgets.get(period)
    }

    /// The budget in force for `period`, or a zero budget if none was saved
    pub fn get_or_zero(&self, period: MonthPeriod) -> LedgerResult<Budget> {
        Ok(active_budget(&self.list()?, period))
    }

    /// All budgets, oldest month first
    pub fn list(&self) -> LedgerResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    pub fn delete(&self, period: MonthPeriod) -> LedgerResult<Budget> {
        let budget = self
            .storage
            .budgets
            .delete(period)?
            .ok_or_else(|| LedgerError::budget_not_found(period.to_string()))?;
        self.storage.budgets.save()?;

        self.storage.log_delete(
            EntityType::Budget,
            period.to_string(),
            Some(period.label()),
            &budget,
        )?;

        Ok(budget)
    }
}
