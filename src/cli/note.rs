//! Monthly note CLI commands

use clap::Subcommand;

use crate::display::format_monthly_note;
use crate::error::{LedgerError, LedgerResult};
use crate::services::NoteService;
use crate::storage::Storage;

use super::parse_period;

/// Monthly note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Write the notes and/or reflection for a month
    Set {
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
        /// End-of-month reflection
        #[arg(short, long)]
        reflection: Option<String>,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show the note for a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List the months that have notes
    List,
}

/// Handle a monthly note command
pub fn handle_note_command(storage: &Storage, cmd: NoteCommands) -> LedgerResult<()> {
    let service = NoteService::new(storage);

    match cmd {
        NoteCommands::Set {
            notes,
            reflection,
            period,
        } => {
            if notes.is_none() && reflection.is_none() {
                return Err(LedgerError::Validation(
                    "Provide --notes and/or --reflection".into(),
                ));
            }
            let period = parse_period(period.as_deref())?;
            service.upsert(period, notes.as_deref(), reflection.as_deref())?;
            println!("Saved notes for {}", period.label());
        }

        NoteCommands::Show { period } => {
            let period = parse_period(period.as_deref())?;
            let note = service.get(period)?;
            print!("{}", format_monthly_note(period, note.as_ref()));
        }

        NoteCommands::List => {
            let notes = service.list()?;
            if notes.is_empty() {
                println!("No notes yet.");
            }
            for note in notes.iter().filter(|n| !n.is_empty()) {
                println!("{}  {}", note.month, note.month.label());
            }
        }
    }

    Ok(())
}
