//! Report CLI commands: monthly summary and running-balance register

use crate::config::settings::Settings;
use crate::display::{format_monthly_summary, format_register};
use crate::error::LedgerResult;
use crate::reports::{running_balance, transactions_in_period, MonthlySummary};
use crate::storage::Storage;

use super::parse_period;

/// Print the summary for one month
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<&str>,
) -> LedgerResult<()> {
    let period = parse_period(period)?;

    let summary = MonthlySummary::generate(
        period,
        &storage.transactions.get_all()?,
        &storage.budgets.get_all()?,
        &storage.savings_goals.get_all()?,
    );
    print!("{}", format_monthly_summary(&summary, &settings.currency_symbol));

    Ok(())
}

/// Print one month's transactions with running balances, newest first
pub fn handle_register_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<&str>,
) -> LedgerResult<()> {
    let period = parse_period(period)?;

    let month = transactions_in_period(&storage.transactions.get_all()?, period);
    let rows = running_balance(&month);

    println!("Ledger for {}", period.label());
    print!(
        "{}",
        format_register(&rows, &settings.currency_symbol, &settings.date_format)
    );

    Ok(())
}
