//! Period filtering and transaction totals
//!
//! The building blocks every other report is derived from. All functions
//! read their input and return fresh values; missing income or expense sides
//! count as zero.

use chrono::NaiveDate;

use crate::models::{EntryKind, Money, MonthPeriod, Transaction};

/// The period a report is evaluated for, given today's date
pub fn current_period(today: NaiveDate) -> MonthPeriod {
    MonthPeriod::from_date(today)
}

/// Transactions dated within `period`, in input order
pub fn transactions_in_period(transactions: &[Transaction], period: MonthPeriod) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect()
}

pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::income_amount).sum()
}

pub fn total_expense(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::expense_amount).sum()
}

/// Income minus expense; negative for a net loss
pub fn net_savings(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expense(transactions)
}

/// Sum of one side for transactions in `category` (exact, case-sensitive)
pub fn category_total(transactions: &[Transaction], category: &str, kind: EntryKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.category == category)
        .map(|t| t.amount(kind))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(day(2024, 1, 5), "Groceries", "Food", Money::from_units(40)),
            Transaction::income(day(2024, 1, 10), "Refund", "Food", Money::from_units(1000)),
            Transaction::expense(day(2024, 2, 1), "Train", "Transport", Money::from_units(15)),
        ]
    }

    #[test]
    fn test_current_period() {
        assert_eq!(
            current_period(day(2024, 3, 31)),
            MonthPeriod::new(2024, 3).unwrap()
        );
    }

    #[test]
    fn test_filter_by_period_keeps_order() {
        let all = sample();
        let jan = transactions_in_period(&all, MonthPeriod::new(2024, 1).unwrap());
        assert_eq!(jan.len(), 2);
        assert_eq!(jan[0].description, "Groceries");
        assert_eq!(jan[1].description, "Refund");

        let mar = transactions_in_period(&all, MonthPeriod::new(2024, 3).unwrap());
        assert!(mar.is_empty());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_totals_example() {
        let all = sample();
        let jan = transactions_in_period(&all, MonthPeriod::new(2024, 1).unwrap());
        assert_eq!(total_income(&jan), Money::from_units(1000));
        assert_eq!(total_expense(&jan), Money::from_units(40));
        assert_eq!(net_savings(&jan), Money::from_units(960));
    }

    #[test]
    fn test_net_savings_is_income_minus_expense() {
        let all = sample();
        assert_eq!(net_savings(&all), total_income(&all) - total_expense(&all));
        assert_eq!(net_savings(&all), Money::from_units(945));
    }

    #[test]
    fn test_missing_and_double_sides() {
        let mut neither = Transaction::expense(day(2024, 1, 1), "Blank", "Misc", Money::zero());
        neither.expense = None;
        let mut both = Transaction::income(day(2024, 1, 2), "Odd", "Misc", Money::from_units(5));
        both.expense = Some(Money::from_units(2));

        let ts = vec![neither, both];
        assert_eq!(total_income(&ts), Money::from_units(5));
        assert_eq!(total_expense(&ts), Money::from_units(2));
        assert_eq!(net_savings(&ts), Money::from_units(3));
    }

    #[test]
    fn test_category_total_is_case_sensitive() {
        let mut ts = sample();
        ts.push(Transaction::expense(day(2024, 1, 6), "Snack", "food", Money::from_units(3)));

        assert_eq!(category_total(&ts, "Food", EntryKind::Expense), Money::from_units(40));
        assert_eq!(category_total(&ts, "Food", EntryKind::Income), Money::from_units(1000));
        assert_eq!(category_total(&ts, "food", EntryKind::Expense), Money::from_units(3));
        assert_eq!(category_total(&ts, "Rent", EntryKind::Expense), Money::zero());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(total_income(&[]), Money::zero());
        assert_eq!(total_expense(&[]), Money::zero());
        assert_eq!(net_savings(&[]), Money::zero());
    }
}
