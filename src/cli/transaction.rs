//! Transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::LedgerResult;
use crate::models::EntryKind;
use crate::services::{CategoryService, CreateTransactionInput, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_period};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense (or income with --income)
    Add {
        /// What the money was for
        description: String,
        /// Amount, e.g. "12.50"
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions for a month, newest first
    List {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
        /// List every transaction in entry order instead
        #[arg(long, conflicts_with = "period")]
        all: bool,
    },

    /// Show one transaction
    Show {
        /// Transaction ID (full or short form)
        id: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short form)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            income,
            date,
        } => {
            let input = CreateTransactionInput {
                date: parse_date(date.as_deref())?,
                description,
                category,
                kind: if income {
                    EntryKind::Income
                } else {
                    EntryKind::Expense
                },
                amount: parse_amount(&amount)?,
            };
            let txn = service.create(input)?;

            println!(
                "Recorded {} {}: {} ({})",
                txn.kind().map(|k| k.to_string().to_lowercase()).unwrap_or_default(),
                txn.id,
                txn.description,
                txn.net().abs().format_with_symbol(symbol)
            );
            if CategoryService::new(storage).find(&txn.category)?.is_none() {
                println!(
                    "Note: '{}' is not a known category. Add it with 'ledger category add'.",
                    txn.category
                );
            }
        }

        TransactionCommands::List { period, all } => {
            let transactions = if all {
                service.list()?
            } else {
                let period = parse_period(period.as_deref())?;
                println!("Transactions for {}", period.label());
                service.list_for_period(period)?
            };
            print!(
                "{}",
                format_transaction_list(&transactions, symbol, &settings.date_format)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!("Deleted transaction {}: {}", txn.id, txn.description);
        }
    }

    Ok(())
}
