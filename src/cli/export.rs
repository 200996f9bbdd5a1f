//! Export CLI commands
//!
//! Each format writes to a file when `--output` is given, otherwise stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

use super::parse_period;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Full snapshot as JSON
    Json {
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Compact output instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Full snapshot as YAML
    Yaml {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Transactions as CSV
    Csv {
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },
}

fn open_output(output: Option<&PathBuf>) -> LedgerResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> LedgerResult<()> {
    let output = match &cmd {
        ExportCommands::Json { output, .. }
        | ExportCommands::Yaml { output }
        | ExportCommands::Csv { output, .. } => output.clone(),
    };
    let mut writer = open_output(output.as_ref())?;

    match cmd {
        ExportCommands::Json { compact, .. } => {
            export_full_json(storage, &mut writer, !compact)?;
            writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
        }
        ExportCommands::Yaml { .. } => export_full_yaml(storage, &mut writer)?,
        ExportCommands::Csv { period, .. } => {
            let period = period.as_deref().map(|p| parse_period(Some(p))).transpose()?;
            let rows = export_transactions_csv(storage, &mut writer, period)?;
            if output.is_some() {
                eprintln!("Exported {} transactions", rows);
            }
        }
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!("Export written to {}", path.display());
    }

    Ok(())
}
