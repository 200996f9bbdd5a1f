//! Running-balance register
//!
//! Balances accumulate from the oldest entry to the newest, then the rows are
//! presented newest first. Entries sharing a date accumulate in input order
//! and are presented in reverse of that order, so the top row always carries
//! the closing balance.

use serde::Serialize;

use crate::models::{Money, Transaction};

/// A transaction annotated with the balance after it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub balance: Money,
}

/// Annotate transactions (usually one period's worth) with running balances
pub fn running_balance(transactions: &[Transaction]) -> Vec<BalanceRow> {
    let mut chronological: Vec<&Transaction> = transactions.iter().collect();
    chronological.sort_by_key(|t| t.date);

    let mut balance = Money::zero();
    let mut rows: Vec<BalanceRow> = chronological
        .into_iter()
        .map(|t| {
            balance += t.net();
            BalanceRow {
                transaction: t.clone(),
                balance,
            }
        })
        .collect();

    rows.reverse();
    rows
}

/// Balance at the end of the register, zero when it is empty
pub fn closing_balance(rows: &[BalanceRow]) -> Money {
    rows.first().map(|r| r.balance).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthPeriod;
    use crate::reports::totals::{net_savings, transactions_in_period};
    use chrono::NaiveDate;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_two_entry_example() {
        let ts = vec![
            Transaction::expense(jan(1), "Coffee", "Food", Money::from_units(10)),
            Transaction::income(jan(2), "Gig", "Work", Money::from_units(50)),
        ];
        let rows = running_balance(&ts);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].transaction.date, jan(2));
        assert_eq!(rows[0].balance, Money::from_units(40));
        assert_eq!(rows[1].transaction.date, jan(1));
        assert_eq!(rows[1].balance, Money::from_units(-10));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let ts = vec![
            Transaction::income(jan(20), "Pay", "Work", Money::from_units(100)),
            Transaction::expense(jan(3), "Rent", "Home", Money::from_units(70)),
            Transaction::expense(jan(10), "Food", "Food", Money::from_units(20)),
        ];
        let rows = running_balance(&ts);

        let dates: Vec<_> = rows.iter().map(|r| r.transaction.date).collect();
        assert_eq!(dates, [jan(20), jan(10), jan(3)]);
        let balances: Vec<_> = rows.iter().map(|r| r.balance).collect();
        assert_eq!(
            balances,
            [Money::from_units(10), Money::from_units(-90), Money::from_units(-70)]
        );
    }

    #[test]
    fn test_same_day_entries_keep_input_order() {
        let ts = vec![
            Transaction::income(jan(5), "First", "Work", Money::from_units(30)),
            Transaction::expense(jan(5), "Second", "Food", Money::from_units(5)),
        ];
        let rows = running_balance(&ts);

        assert_eq!(rows[0].transaction.description, "Second");
        assert_eq!(rows[0].balance, Money::from_units(25));
        assert_eq!(rows[1].transaction.description, "First");
        assert_eq!(rows[1].balance, Money::from_units(30));
    }

    #[test]
    fn test_closing_balance_matches_period_net() {
        let ts = vec![
            Transaction::income(jan(8), "Pay", "Work", Money::from_units(800)),
            Transaction::expense(jan(8), "Rent", "Home", Money::from_units(500)),
            Transaction::expense(jan(2), "Bus", "Transport", Money::from_cents(275)),
            Transaction::expense(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                "Later",
                "Food",
                Money::from_units(9),
            ),
        ];
        let period = MonthPeriod::new(2024, 1).unwrap();
        let in_period = transactions_in_period(&ts, period);
        let rows = running_balance(&in_period);

        assert_eq!(closing_balance(&rows), net_savings(&in_period));
        assert_eq!(closing_balance(&rows), Money::from_cents(29725));
    }

    #[test]
    fn test_empty_register() {
        let rows = running_balance(&[]);
        assert!(rows.is_empty());
        assert_eq!(closing_balance(&rows), Money::zero());
    }
}
