//! Transaction repository backed by `transactions.json`
//!
//! Records are kept in the order they were entered. Report tie-breaks rely
//! on that order, so nothing here re-sorts the stored list.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{MonthPeriod, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk, replacing anything in memory
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.transactions;

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// All transactions in entry order
    pub fn get_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Transactions dated inside `period`, in entry order
    pub fn get_by_period(&self, period: MonthPeriod) -> Result<Vec<Transaction>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|t| period.contains(t.date))
            .cloned()
            .collect())
    }

    /// Find every transaction whose ID matches a user-supplied reference
    pub fn find_matching(&self, reference: &str) -> Result<Vec<Transaction>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|t| t.id.matches(reference))
            .cloned()
            .collect())
    }

    /// Append a new transaction, or replace one with the same ID in place
    pub fn upsert(&self, txn: Transaction) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(existing) => *existing = txn,
            None => data.push(txn),
        }
        Ok(())
    }

    pub fn delete(&self, id: TransactionId) -> Result<bool, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() != before)
    }

    /// Number of transactions filed under a category name
    pub fn count_by_category(&self, category: &str) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().filter(|t| t.category == category).count())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        (temp_dir, repo)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let txn = Transaction::expense(day(2024, 3, 2), "Lunch", "Food", Money::from_cents(1250));
        let id = txn.id;

        repo.upsert(txn).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.expense_amount().cents(), 1250);
    }

    #[test]
    fn test_entry_order_survives_reload() {
        let (temp_dir, repo) = create_test_repo();
        let later = Transaction::expense(day(2024, 3, 20), "Later", "Food", Money::from_cents(100));
        let earlier = Transaction::expense(day(2024, 3, 1), "Earlier", "Food", Money::from_cents(200));

        repo.upsert(later).unwrap();
        repo.upsert(earlier).unwrap();
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();
        let descriptions: Vec<_> = reloaded
            .get_all()
            .unwrap()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(descriptions, ["Later", "Earlier"]);
    }

    #[test]
    fn test_get_by_period() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Transaction::expense(day(2024, 2, 29), "Feb", "Food", Money::from_cents(1)))
            .unwrap();
        repo.upsert(Transaction::expense(day(2024, 3, 1), "Mar", "Food", Money::from_cents(2)))
            .unwrap();

        let march = repo.get_by_period(MonthPeriod::new(2024, 3).unwrap()).unwrap();
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].description, "Mar");
    }

    #[test]
    fn test_delete_and_find_matching() {
        let (_temp_dir, repo) = create_test_repo();
        let txn = Transaction::income(day(2024, 3, 1), "Salary", "Salary", Money::from_cents(300000));
        let id = txn.id;
        repo.upsert(txn).unwrap();

        assert_eq!(repo.find_matching(&id.to_string()).unwrap().len(), 1);
        assert_eq!(repo.count_by_category("Salary").unwrap(), 1);

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
