//! Savings goal service
//!
//! Goals start empty and only grow through deposits; there are no
//! withdrawals.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, SavingsGoal};
use crate::storage::Storage;

/// Service for savings goal management
pub struct SavingsGoalService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingsGoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, name: &str, target_amount: Money) -> LedgerResult<SavingsGoal> {
        let goal = SavingsGoal::new(name.trim(), target_amount);
        goal.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.savings_goals.upsert(goal.clone())?;
        self.storage.savings_goals.save()?;

        self.storage.log_create(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Resolve a goal by ID reference or exact name (ignoring case)
    pub fn find(&self, reference: &str) -> LedgerResult<SavingsGoal> {
        let mut matches = self.storage.savings_goals.find_matching(reference)?;
        match matches.len() {
            0 => Err(LedgerError::goal_not_found(reference)),
            1 => Ok(matches.remove(0)),
            n => Err(LedgerError::Validation(format!(
                "'{}' matches {} savings goals, use the goal ID",
                reference, n
            ))),
        }
    }

    /// Add a positive amount to a goal's saved total
    pub fn deposit(&self, reference: &str, amount: Money) -> LedgerResult<SavingsGoal> {
        let before = self.find(reference)?;
        let mut goal = before.clone();
        goal.deposit(amount)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.savings_goals.upsert(goal.clone())?;
        self.storage.savings_goals.save()?;

        self.storage.log_update(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
        )?;

        Ok(goal)
    }

    pub fn list(&self) -> LedgerResult<Vec<SavingsGoal>> {
        self.storage.savings_goals.get_all()
    }

    pub fn delete(&self, reference: &str) -> LedgerResult<SavingsGoal> {
        let goal = self.find(reference)?;

        self.storage.savings_goals.delete(goal.id)?;
        self.storage.savings_goals.save()?;

        self.storage.log_delete(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }
}
