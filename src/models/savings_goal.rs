//! Savings goal model
//!
//! Goals start empty and only grow through deposits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsGoalId;
use super::money::Money;

/// A named savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: SavingsGoalId,
    pub name: String,
    pub target_amount: Money,
    #[serde(default)]
    pub current_amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create an empty goal
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: SavingsGoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a deposit to the saved amount
    pub fn deposit(&mut self, amount: Money) -> Result<(), SavingsGoalValidationError> {
        if !amount.is_positive() {
            return Err(SavingsGoalValidationError::NonPositiveDeposit);
        }
        self.current_amount += amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Amount still missing to reach the target, never negative
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn validate(&self) -> Result<(), SavingsGoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(SavingsGoalValidationError::EmptyName);
        }
        if self.target_amount.is_negative() || self.current_amount.is_negative() {
            return Err(SavingsGoalValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavingsGoalValidationError {
    EmptyName,
    NegativeAmount,
    NonPositiveDeposit,
}

impl fmt::Display for SavingsGoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NegativeAmount => write!(f, "Goal amounts cannot be negative"),
            Self::NonPositiveDeposit => write!(f, "Deposit must be greater than zero"),
        }
    }
}

impl std::error::Error for SavingsGoalValidationError {}
