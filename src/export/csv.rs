//! Transaction export to CSV

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthPeriod, Transaction};
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Income")]
    income: String,
    #[serde(rename = "Expense")]
    expense: String,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: &txn.description,
            category: &txn.category,
            income: txn.income.map(|m| m.format_with_symbol("")).unwrap_or_default(),
            expense: txn.expense.map(|m| m.format_with_symbol("")).unwrap_or_default(),
        }
    }
}

/// Write transactions as CSV in entry order, optionally limited to one month
///
/// Returns the number of rows written.
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    writer: &mut W,
    period: Option<MonthPeriod>,
) -> LedgerResult<usize> {
    let transactions = match period {
        Some(period) => storage.transactions.get_by_period(period)?,
        None => storage.transactions.get_all()?,
    };

    let mut csv_writer = ::csv::Writer::from_writer(writer);
    if transactions.is_empty() {
        csv_writer
            .write_record(["ID", "Date", "Description", "Category", "Income", "Expense"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }
    for txn in &transactions {
        csv_writer
            .serialize(TransactionRow::from(txn))
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(transactions.len())
}
