//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer and the report
//! engine. Handlers print through the `display` module.

pub mod audit;
pub mod budget;
pub mod category;
pub mod export;
pub mod goal;
pub mod note;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use note::{handle_note_command, NoteCommands};
pub use report::{handle_register_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthPeriod};
use crate::reports::current_period;

/// Parse a `--period` argument, defaulting to the current month
pub(crate) fn parse_period(period: Option<&str>) -> LedgerResult<MonthPeriod> {
    match period {
        Some(p) => MonthPeriod::parse(p).map_err(|e| LedgerError::Validation(e.to_string())),
        None => Ok(current_period(chrono::Local::now().date_naive())),
    }
}

/// Parse an amount such as `12.50` or `$1,200`
pub(crate) fn parse_amount(amount: &str) -> LedgerResult<Money> {
    Money::parse(amount).map_err(|e| LedgerError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub(crate) fn parse_date(date: Option<&str>) -> LedgerResult<NaiveDate> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", d))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
