//! Transaction service
//!
//! Validates new entries, resolves user-supplied ID references and records
//! every change in the audit log.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryKind, Money, MonthPeriod, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub kind: EntryKind,
    pub amount: Money,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new income or expense entry
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let description = input.description.trim();
        let category = input.category.trim();

        let txn = match input.kind {
            EntryKind::Income => Transaction::income(input.date, description, category, input.amount),
            EntryKind::Expense => {
                Transaction::expense(input.date, description, category, input.amount)
            }
        };

        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Resolve a full or short ID reference to exactly one transaction
    pub fn find(&self, reference: &str) -> LedgerResult<Transaction> {
        let mut matches = self.storage.transactions.find_matching(reference)?;
        match matches.len() {
            0 => Err(LedgerError::transaction_not_found(reference)),
            1 => Ok(matches.remove(0)),
            n => Err(LedgerError::Validation(format!(
                "'{}' matches {} transactions, use a longer ID",
                reference, n
            ))),
        }
    }

    /// All transactions in entry order
    pub fn list(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions of one month, newest date first
    ///
    /// Entries sharing a date keep their entry order.
    pub fn list_for_period(&self, period: MonthPeriod) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_by_period(period)?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Delete the transaction named by `reference`
    pub fn delete(&self, reference: &str) -> LedgerResult<Transaction> {
        let txn = self.find(reference)?;

        self.storage.transactions.delete(txn.id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    pub fn count(&self) -> LedgerResult<usize> {
        self.storage.transactions.count()
    }
}
