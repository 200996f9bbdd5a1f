//! Reports module for monthly-ledger
//!
//! The derivation engine: pure functions that turn transactions, a month's
//! budget and savings goals into totals, rankings, running balances,
//! variances and progress figures. Nothing here performs I/O or reads the
//! clock; the month being evaluated is always passed in.

pub mod budget_overview;
pub mod monthly_summary;
pub mod register;
pub mod savings;
pub mod spending;
pub mod totals;

pub use budget_overview::{
    active_budget, budget_category_status, budget_status, income_variance, savings_variance,
    CategoryStatus,
};
pub use monthly_summary::MonthlySummary;
pub use register::{closing_balance, running_balance, BalanceRow};
pub use savings::{goal_progress, savings_progress, GoalProgress, SavingsProgress};
pub use spending::{expense_breakdown, top_expense_category, BreakdownEntry, CategoryAmount};
pub use totals::{
    category_total, current_period, net_savings, total_expense, total_income,
    transactions_in_period,
};
