//! Transaction model
//!
//! A dated income or expense entry. Entries are immutable once recorded; the
//! only lifecycle change is deletion by ID.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Which side of a transaction an aggregate reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Calendar day of the entry
    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    /// Category name, matched exactly against `Category::name`
    pub category: String,

    /// Income amount, if this is an income entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Money>,

    /// Expense amount, if this is an expense entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense: Option<Money>,

    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    fn blank(date: NaiveDate, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            category: category.into(),
            income: None,
            expense: None,
            created_at: Utc::now(),
        }
    }

    /// Create an income entry
    pub fn income(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        let mut txn = Self::blank(date, description, category);
        txn.income = Some(amount);
        txn
    }

    /// Create an expense entry
    pub fn expense(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        let mut txn = Self::blank(date, description, category);
        txn.expense = Some(amount);
        txn
    }

    /// Income amount, missing treated as zero
    pub fn income_amount(&self) -> Money {
        self.income.unwrap_or_default()
    }

    /// Expense amount, missing treated as zero
    pub fn expense_amount(&self) -> Money {
        self.expense.unwrap_or_default()
    }

    /// Amount on the requested side
    pub fn amount(&self, kind: EntryKind) -> Money {
        match kind {
            EntryKind::Income => self.income_amount(),
            EntryKind::Expense => self.expense_amount(),
        }
    }

    /// Signed contribution to a balance: income minus expense
    pub fn net(&self) -> Money {
        self.income_amount() - self.expense_amount()
    }

    /// The populated side, if exactly one side carries a positive amount
    pub fn kind(&self) -> Option<EntryKind> {
        match (self.income_amount().is_positive(), self.expense_amount().is_positive()) {
            (true, false) => Some(EntryKind::Income),
            (false, true) => Some(EntryKind::Expense),
            _ => None,
        }
    }

    /// Validate a new entry before it is stored
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        if self.income_amount().is_negative() || self.expense_amount().is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        if self.kind().is_none() {
            return Err(TransactionValidationError::NeedsExactlyOneSide);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.net()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    EmptyCategory,
    NegativeAmount,
    NeedsExactlyOneSide,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NegativeAmount => write!(f, "Amounts cannot be negative"),
            Self::NeedsExactlyOneSide => {
                write!(f, "Fill in exactly one of income or expense")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_missing_sides_read_as_zero() {
        let mut txn = Transaction::expense(jan(5), "Lunch", "Food", Money::from_units(12));
        assert_eq!(txn.income_amount(), Money::zero());
        assert_eq!(txn.net(), Money::from_units(-12));

        txn.expense = None;
        assert_eq!(txn.net(), Money::zero());
        assert_eq!(txn.kind(), None);
    }

    #[test]
    fn test_validate_requires_one_side() {
        let mut txn = Transaction::income(jan(1), "Salary", "Salary", Money::from_units(1000));
        assert!(txn.validate().is_ok());

        txn.expense = Some(Money::from_units(5));
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NeedsExactlyOneSide)
        );

        txn.expense = None;
        txn.income = Some(Money::zero());
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NeedsExactlyOneSide)
        );
    }

    #[test]
    fn test_validate_text_fields() {
        let mut txn = Transaction::expense(jan(2), " ", "Food", Money::from_units(3));
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));

        txn.description = "Coffee".into();
        txn.category = String::new();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_serialization_omits_empty_side() {
        let txn = Transaction::expense(jan(3), "Bus", "Transport", Money::from_cents(275));
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["expense"], 275);
        assert!(json.get("income").is_none());
        assert_eq!(json["date"], "2024-01-03");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
