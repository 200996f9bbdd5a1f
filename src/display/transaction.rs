//! Transaction display formatting

use tabled::Tabled;

use crate::models::{Money, Transaction};
use crate::reports::{closing_balance, BalanceRow};

use super::{render_table, truncate};

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
}

#[derive(Tabled)]
struct RegisterLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

fn side(amount: Option<Money>, symbol: &str) -> String {
    match amount {
        Some(m) if !m.is_zero() => m.format_with_symbol(symbol),
        _ => String::new(),
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str, date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|t| TransactionLine {
            id: t.id.to_string(),
            date: t.date.format(date_format).to_string(),
            description: truncate(&t.description, 30),
            category: t.category.clone(),
            income: side(t.income, symbol),
            expense: side(t.expense, symbol),
        })
        .collect();

    format!("{}\n", render_table(rows, 4))
}

/// Format a running-balance register with its closing balance
pub fn format_register(rows: &[BalanceRow], symbol: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let lines = rows
        .iter()
        .map(|row| RegisterLine {
            date: row.transaction.date.format(date_format).to_string(),
            description: truncate(&row.transaction.description, 30),
            category: row.transaction.category.clone(),
            income: side(row.transaction.income, symbol),
            expense: side(row.transaction.expense, symbol),
            balance: row.balance.format_with_symbol(symbol),
        })
        .collect();

    format!(
        "{}\nClosing balance: {}\n",
        render_table(lines, 3),
        closing_balance(rows).format_with_symbol(symbol)
    )
}

/// Format one transaction as a detail block
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));
    if let Some(income) = txn.income.filter(|m| !m.is_zero()) {
        output.push_str(&format!("Income:      {}\n", income.format_with_symbol(symbol)));
    }
    if let Some(expense) = txn.expense.filter(|m| !m.is_zero()) {
        output.push_str(&format!("Expense:     {}\n", expense.format_with_symbol(symbol)));
    }

    output
}
