//! Budget versus actuals
//!
//! Compares one month's transactions against that month's budget. Callers
//! resolve the budget with [`active_budget`], which falls back to a zero
//! budget when the month has none.

use serde::Serialize;

use crate::models::{Budget, EntryKind, Money, MonthPeriod, Transaction};

use super::totals::{category_total, net_savings, total_income};

/// Spending against one category limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatus {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    /// Spent as a share of the limit; 0 when the limit is 0
    pub percent: f64,
    pub over_budget: bool,
}

impl CategoryStatus {
    /// Limit left to spend, negative when over budget
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

/// Pick the budget for `period` out of the stored budgets
///
/// Budgets for other months are ignored; a month without one gets
/// [`Budget::zero`].
pub fn active_budget(budgets: &[Budget], period: MonthPeriod) -> Budget {
    budgets
        .iter()
        .find(|b| b.month == period)
        .cloned()
        .unwrap_or_else(|| Budget::zero(period))
}

/// Status of a single category against the budget
///
/// A category without a limit line is measured against a limit of 0.
pub fn budget_category_status(
    budget: &Budget,
    transactions: &[Transaction],
    category: &str,
) -> CategoryStatus {
    let spent = category_total(transactions, category, EntryKind::Expense);
    let limit = budget.limit_for(category).unwrap_or_default();

    CategoryStatus {
        category: category.to_string(),
        spent,
        limit,
        percent: spent.percent_of(limit),
        over_budget: spent > limit,
    }
}

/// Status for every limit line, in budget order
pub fn budget_status(budget: &Budget, transactions: &[Transaction]) -> Vec<CategoryStatus> {
    budget
        .category_limits
        .iter()
        .map(|line| budget_category_status(budget, transactions, &line.category))
        .collect()
}

/// Expected income minus actual income; positive when income fell short
pub fn income_variance(budget: &Budget, transactions: &[Transaction]) -> Money {
    budget.expected_income - total_income(transactions)
}

/// Net savings minus the savings target; positive when the target was beaten
pub fn savings_variance(budget: &Budget, transactions: &[Transaction]) -> Money {
    net_savings(transactions) - budget.savings_target
}
