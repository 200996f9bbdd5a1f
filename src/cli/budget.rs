//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget;
use crate::error::LedgerResult;
use crate::reports::{budget_status, transactions_in_period};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_period};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set expected income and savings target for a month
    Set {
        /// Expected income, e.g. "3200"
        #[arg(long)]
        income: String,
        /// Savings target, e.g. "500"
        #[arg(long, default_value = "0")]
        savings: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Set the spending limit for one category
    Limit {
        /// Category name
        category: String,
        /// Limit amount
        amount: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Remove the spending limit for one category
    #[command(name = "remove-limit")]
    RemoveLimit {
        /// Category name
        category: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Delete a month's budget
    Delete {
        /// Month (YYYY-MM)
        period: String,
    },

    /// Show a month's budget and spending against it
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            income,
            savings,
            period,
        } => {
            let period = parse_period(period.as_deref())?;
            let budget =
                service.set_amounts(period, parse_amount(&income)?, parse_amount(&savings)?)?;
            println!(
                "Budget for {}: expected income {}, savings target {}",
                period.label(),
                budget.expected_income.format_with_symbol(symbol),
                budget.savings_target.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Limit {
            category,
            amount,
            period,
        } => {
            let period = parse_period(period.as_deref())?;
            let limit = parse_amount(&amount)?;
            service.set_limit(period, &category, limit)?;
            println!(
                "Limit for {} in {}: {}",
                category.trim(),
                period.label(),
                limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::RemoveLimit { category, period } => {
            let period = parse_period(period.as_deref())?;
            service.remove_limit(period, &category)?;
            println!("Removed limit for {} in {}", category.trim(), period.label());
        }

        BudgetCommands::Delete { period } => {
            let period = parse_period(Some(&period))?;
            service.delete(period)?;
            println!("Deleted budget for {}", period.label());
        }

        BudgetCommands::Show { period } => {
            let period = parse_period(period.as_deref())?;
            let budget = service.get(period)?;
            let status = match &budget {
                Some(budget) => {
                    let month = transactions_in_period(&storage.transactions.get_all()?, period);
                    budget_status(budget, &month)
                }
                None => Vec::new(),
            };
            print!("{}", format_budget(period, budget.as_ref(), &status, symbol));
        }
    }

    Ok(())
}
