use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use monthly_ledger::cli::{
    handle_audit_command, handle_budget_command, handle_category_command, handle_export_command,
    handle_goal_command, handle_note_command, handle_register_command, handle_summary_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, ExportCommands, GoalCommands,
    NoteCommands, TransactionCommands,
};
use monthly_ledger::config::{paths::LedgerPaths, paths::DATA_DIR_ENV, settings::Settings};
use monthly_ledger::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Monthly personal ledger: transactions, budgets, savings goals and reflections",
    long_about = "monthly-ledger records income and expenses, compares each month \
                  against its budget, tracks savings goals and keeps a short \
                  reflection for every month, all from the command line."
)]
struct Cli {
    /// Data directory (overrides the default location)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Monthly notes and reflections
    #[command(subcommand)]
    Note(NoteCommands),

    /// Summary of one month
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// One month's transactions with running balances
    #[command(alias = "register")]
    Ledger {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            let seeded = settings.seed_default_categories
                && monthly_ledger::storage::init::needs_category_seed(&paths);
            initialize_storage(&paths, settings.seed_default_categories)?;
            settings.save(&paths)?;

            println!("Initialized monthly-ledger at: {}", paths.base_dir().display());
            if seeded {
                println!("Default categories created: Food, Transport, Utilities, Entertainment, Healthcare, Savings, Miscellaneous");
            }
            println!("Run 'ledger txn add --help' to record your first transaction.");
        }
        Some(Commands::Config) => {
            println!("monthly-ledger configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Seed categories: {}", settings.seed_default_categories);
        }
        Some(Commands::Txn(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Note(cmd)) => handle_note_command(&storage, cmd)?,
        Some(Commands::Summary { period }) => {
            handle_summary_command(&storage, &settings, period.as_deref())?
        }
        Some(Commands::Ledger { period }) => {
            handle_register_command(&storage, &settings, period.as_deref())?
        }
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        None => {
            println!("monthly-ledger - track a month of money at a time");
            println!();
            println!("Run 'ledger --help' for usage information.");
            if !storage.is_initialized() {
                println!("Run 'ledger init' to get started.");
            }
        }
    }

    Ok(())
}
