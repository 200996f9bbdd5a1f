//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_goal_list;
use crate::error::LedgerResult;
use crate::reports::{goal_progress, savings_progress};
use crate::services::SavingsGoalService;
use crate::storage::Storage;

use super::parse_amount;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
    },

    /// Add money to a goal
    Deposit {
        /// Goal name or ID
        goal: String,
        /// Amount to add (must be positive)
        amount: String,
    },

    /// List goals with their progress
    List,

    /// Delete a goal
    Delete {
        /// Goal name or ID
        goal: String,
    },
}

/// Handle a savings goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    let service = SavingsGoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add { name, target } => {
            let goal = service.create(&name, parse_amount(&target)?)?;
            println!(
                "Created goal: {} ({}), target {}",
                goal.name,
                goal.id,
                goal.target_amount.format_with_symbol(symbol)
            );
        }

        GoalCommands::Deposit { goal, amount } => {
            let goal = service.deposit(&goal, parse_amount(&amount)?)?;
            let progress = goal_progress(&goal);
            println!(
                "{}: {} of {} ({:.1}%)",
                goal.name,
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                progress.percent
            );
            if goal.is_reached() {
                println!("Goal reached!");
            }
        }

        GoalCommands::List => {
            let goals = service.list()?;
            let progress: Vec<_> = goals.iter().map(goal_progress).collect();
            print!(
                "{}",
                format_goal_list(&progress, &savings_progress(&goals), symbol)
            );
        }

        GoalCommands::Delete { goal } => {
            let goal = service.delete(&goal)?;
            println!("Deleted goal: {}", goal.name);
        }
    }

    Ok(())
}
