//! Monthly summary report
//!
//! Everything the summary screen shows for one month, derived in one pass
//! from the raw records.

use serde::Serialize;

use crate::models::{Budget, Money, MonthPeriod, SavingsGoal, Transaction};

use super::budget_overview::{
    active_budget, budget_status, income_variance, savings_variance, CategoryStatus,
};
use super::savings::{savings_progress, SavingsProgress};
use super::spending::{expense_breakdown, top_expense_category, BreakdownEntry, CategoryAmount};
use super::totals::{net_savings, total_expense, total_income, transactions_in_period};

/// Derived figures for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub net_savings: Money,
    pub top_category: Option<CategoryAmount>,
    pub breakdown: Vec<BreakdownEntry>,
    /// Budget used for comparison; zero when the month has none
    pub budget: Budget,
    /// Whether `budget` was stored for this month rather than the zero stand-in
    pub budget_found: bool,
    pub income_variance: Money,
    pub savings_variance: Money,
    pub category_status: Vec<CategoryStatus>,
    pub savings: SavingsProgress,
}

impl MonthlySummary {
    /// Generate the summary for `period`
    ///
    /// `transactions` and `budgets` may span any number of months; only
    /// entries and the budget for `period` are used.
    pub fn generate(
        period: MonthPeriod,
        transactions: &[Transaction],
        budgets: &[Budget],
        goals: &[SavingsGoal],
    ) -> Self {
        let month = transactions_in_period(transactions, period);
        let budget = active_budget(budgets, period);

        Self {
            period,
            transaction_count: month.len(),
            total_income: total_income(&month),
            total_expense: total_expense(&month),
            net_savings: net_savings(&month),
            top_category: top_expense_category(&month),
            breakdown: expense_breakdown(&month),
            income_variance: income_variance(&budget, &month),
            savings_variance: savings_variance(&budget, &month),
            category_status: budget_status(&budget, &month),
            savings: savings_progress(goals),
            budget_found: budgets.iter().any(|b| b.month == period),
            budget,
        }
    }

    /// Whether a budget was saved for this month, even one with all amounts at zero
    pub fn has_budget(&self) -> bool {
        self.budget_found
    }

    /// Categories whose spending exceeded their limit
    pub fn over_budget(&self) -> impl Iterator<Item = &CategoryStatus> {
        self.category_status.iter().filter(|s| s.over_budget)
    }
}
