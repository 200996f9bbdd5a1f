//! Expense ranking by category
//!
//! Groups expenses by category name, then ranks the groups. Categories are
//! kept in the order they are first seen so ties resolve deterministically:
//! the earliest category wins the top spot and keeps its place in the
//! breakdown.

use serde::Serialize;

use crate::models::{Money, Transaction};

use super::totals::total_expense;

/// A category together with an amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

/// One line of the expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub category: String,
    pub amount: Money,
    /// Share of the period's total expense, 0 when there was none
    pub percent: f64,
}

/// Fold positive expenses into per-category totals, in first-seen order
///
/// Transactions without a positive expense do not open a group.
fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryAmount> {
    transactions
        .iter()
        .filter(|t| t.expense_amount().is_positive())
        .fold(Vec::new(), |mut groups: Vec<CategoryAmount>, t| {
            match groups.iter_mut().find(|g| g.category == t.category) {
                Some(group) => group.amount += t.expense_amount(),
                None => groups.push(CategoryAmount {
                    category: t.category.clone(),
                    amount: t.expense_amount(),
                }),
            }
            groups
        })
}

/// The category with the strictly greatest expense total
///
/// Returns `None` when no transaction has a positive expense.
pub fn top_expense_category(transactions: &[Transaction]) -> Option<CategoryAmount> {
    expenses_by_category(transactions)
        .into_iter()
        .fold(None, |best: Option<CategoryAmount>, group| match best {
            Some(current) if group.amount <= current.amount => Some(current),
            _ => Some(group),
        })
}

/// Every category with expenses, largest first
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<BreakdownEntry> {
    let total = total_expense(transactions);
    let mut groups = expenses_by_category(transactions);
    // stable: equal amounts stay in first-seen order
    groups.sort_by(|a, b| b.amount.cmp(&a.amount));

    groups
        .into_iter()
        .map(|g| BreakdownEntry {
            percent: g.amount.percent_of(total),
            category: g.category,
            amount: g.amount,
        })
        .collect()
}
