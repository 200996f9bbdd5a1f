//! Monthly budget repository backed by `budgets.json`
//!
//! At most one budget exists per month; the month is the key.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Budget, MonthPeriod};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<BTreeMap<MonthPeriod, Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load budgets from disk
    ///
    /// If the file holds more than one budget for a month, the first wins.
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data.budgets {
            budgets.entry(budget.month).or_insert(budget);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: budgets.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, month: MonthPeriod) -> Result<Option<Budget>, LedgerError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&month).cloned())
    }

    /// All budgets, oldest month first
    pub fn get_all(&self) -> Result<Vec<Budget>, LedgerError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.values().cloned().collect())
    }

    /// Store a budget, returning the one it replaced
    pub fn upsert(&self, budget: Budget) -> Result<Option<Budget>, LedgerError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.insert(budget.month, budget))
    }

    pub fn delete(&self, month: MonthPeriod) -> Result<Option<Budget>, LedgerError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(&month))
    }
}
