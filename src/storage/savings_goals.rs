//! Savings goal repository backed by `savings_goals.json`

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{SavingsGoal, SavingsGoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SavingsGoalData {
    goals: Vec<SavingsGoal>,
}

/// Repository for savings goals, in creation order
pub struct SavingsGoalRepository {
    path: PathBuf,
    goals: RwLock<Vec<SavingsGoal>>,
}

impl SavingsGoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: SavingsGoalData = read_json(&self.path)?;

        let mut goals = self
            .goals
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *goals = file_data.goals;

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = SavingsGoalData {
            goals: goals.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: SavingsGoalId) -> Result<Option<SavingsGoal>, LedgerError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.iter().find(|g| g.id == id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, LedgerError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.clone())
    }

    /// Goals whose ID matches the reference, or whose name equals it ignoring case
    pub fn find_matching(&self, reference: &str) -> Result<Vec<SavingsGoal>, LedgerError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let reference = reference.trim();
        Ok(goals
            .iter()
            .filter(|g| g.id.matches(reference) || g.name.eq_ignore_ascii_case(reference))
            .cloned()
            .collect())
    }

    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), LedgerError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match goals.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => *existing = goal,
            None => goals.push(goal),
        }
        Ok(())
    }

    pub fn delete(&self, id: SavingsGoalId) -> Result<bool, LedgerError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = goals.len();
        goals.retain(|g| g.id != id);
        Ok(goals.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_updates_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SavingsGoalRepository::new(temp_dir.path().join("savings_goals.json"));

        let mut goal = SavingsGoal::new("Emergency fund", Money::from_cents(100000));
        repo.upsert(goal.clone()).unwrap();
        repo.upsert(SavingsGoal::new("Bike", Money::from_cents(40000))).unwrap();

        goal.deposit(Money::from_cents(2500)).unwrap();
        repo.upsert(goal.clone()).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].current_amount.cents(), 2500);
    }

    #[test]
    fn test_find_by_name_or_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SavingsGoalRepository::new(temp_dir.path().join("savings_goals.json"));
        let goal = SavingsGoal::new("Vacation", Money::from_cents(200000));
        let id = goal.id;
        repo.upsert(goal).unwrap();

        assert_eq!(repo.find_matching("vacation").unwrap().len(), 1);
        assert_eq!(repo.find_matching(&id.to_string()).unwrap().len(), 1);
        assert!(repo.find_matching("car").unwrap().is_empty());
    }

    #[test]
    fn test_save_reload_delete() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings_goals.json");
        let repo = SavingsGoalRepository::new(path.clone());
        let goal = SavingsGoal::new("Laptop", Money::from_cents(150000));
        let id = goal.id;
        repo.upsert(goal).unwrap();
        repo.save().unwrap();

        let reloaded = SavingsGoalRepository::new(path);
        reloaded.load().unwrap();
        assert!(reloaded.get(id).unwrap().is_some());
        assert!(reloaded.delete(id).unwrap());
        assert!(reloaded.get_all().unwrap().is_empty());
    }
}
