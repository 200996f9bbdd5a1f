//! Monthly budget model
//!
//! A budget sets the expected income, savings target and per-category
//! spending limits for one month. Budgets are keyed by their month; a month
//! with no stored budget behaves like [`Budget::zero`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthPeriod;

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimit {
    /// Category name
    pub category: String,
    pub limit: Money,
}

impl CategoryLimit {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

/// The budget for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Month this budget applies to
    pub month: MonthPeriod,

    #[serde(default)]
    pub expected_income: Money,

    #[serde(default)]
    pub savings_target: Money,

    /// Limits in display order, unique by category name
    #[serde(default)]
    pub category_limits: Vec<CategoryLimit>,

    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(month: MonthPeriod, expected_income: Money, savings_target: Money) -> Self {
        Self {
            month,
            expected_income,
            savings_target,
            category_limits: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// The stand-in for a month without a budget: no income expected, no
    /// savings target, no limits
    ///
    /// Stamped with the Unix epoch; `BudgetService::save` restamps on write.
    pub fn zero(month: MonthPeriod) -> Self {
        Self {
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
            ..Self::new(month, Money::zero(), Money::zero())
        }
    }

    /// Check whether this budget has any content
    pub fn is_zero(&self) -> bool {
        self.expected_income.is_zero()
            && self.savings_target.is_zero()
            && self.category_limits.is_empty()
    }

    /// Limit for a category, matched exactly by name
    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.category_limits
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.limit)
    }

    /// Set a category limit, replacing an existing line in place
    pub fn set_limit(&mut self, category: impl Into<String>, limit: Money) {
        let category = category.into();
        match self
            .category_limits
            .iter_mut()
            .find(|l| l.category == category)
        {
            Some(line) => line.limit = limit,
            None => self.category_limits.push(CategoryLimit::new(category, limit)),
        }
        self.updated_at = Utc::now();
    }

    /// Remove a category limit; returns whether a line was removed
    pub fn remove_limit(&mut self, category: &str) -> bool {
        let before = self.category_limits.len();
        self.category_limits.retain(|l| l.category != category);
        let removed = self.category_limits.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Sum of all category limits
    pub fn total_limits(&self) -> Money {
        self.category_limits.iter().map(|l| l.limit).sum()
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.expected_income.is_negative() || self.savings_target.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }

        for (i, line) in self.category_limits.iter().enumerate() {
            if line.category.trim().is_empty() {
                return Err(BudgetValidationError::EmptyCategory);
            }
            if line.limit.is_negative() {
                return Err(BudgetValidationError::NegativeAmount);
            }
            if self.category_limits[..i]
                .iter()
                .any(|earlier| earlier.category == line.category)
            {
                return Err(BudgetValidationError::DuplicateCategory(
                    line.category.clone(),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected income {}, savings target {}, {} limits",
            self.month,
            self.expected_income,
            self.savings_target,
            self.category_limits.len()
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount,
    EmptyCategory,
    DuplicateCategory(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Budget amounts cannot be negative"),
            Self::EmptyCategory => write!(f, "Budget limit needs a category name"),
            Self::DuplicateCategory(c) => {
                write!(f, "Category '{}' has more than one limit", c)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> MonthPeriod {
        MonthPeriod::new(2024, 1).unwrap()
    }

    #[test]
    fn test_zero_budget() {
        let budget = Budget::zero(jan());
        assert!(budget.is_zero());
        assert_eq!(budget.limit_for("Food"), None);
        assert_eq!(budget.total_limits(), Money::zero());
        assert_eq!(budget.updated_at, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(Budget::zero(jan()), budget);
    }

    #[test]
    fn test_set_limit_replaces_in_place() {
        let mut budget = Budget::new(jan(), Money::from_units(1000), Money::from_units(200));
        budget.set_limit("Food", Money::from_units(300));
        budget.set_limit("Transport", Money::from_units(80));
        budget.set_limit("Food", Money::from_units(250));

        assert_eq!(budget.category_limits.len(), 2);
        assert_eq!(budget.category_limits[0].category, "Food");
        assert_eq!(budget.limit_for("Food"), Some(Money::from_units(250)));
        assert_eq!(budget.total_limits(), Money::from_units(330));
    }

    #[test]
    fn test_remove_limit() {
        let mut budget = Budget::zero(jan());
        budget.set_limit("Food", Money::from_units(10));
        assert!(budget.remove_limit("Food"));
        assert!(!budget.remove_limit("Food"));
        assert!(budget.is_zero());
    }

    #[test]
    fn test_validate_duplicates() {
        let mut budget = Budget::zero(jan());
        budget
            .category_limits
            .push(CategoryLimit::new("Food", Money::from_units(1)));
        budget
            .category_limits
            .push(CategoryLimit::new("Food", Money::from_units(2)));
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::DuplicateCategory("Food".into()))
        );
    }

    #[test]
    fn test_validate_negative() {
        let budget = Budget::new(jan(), Money::from_cents(-1), Money::zero());
        assert_eq!(budget.validate(), Err(BudgetValidationError::NegativeAmount));
    }
}
