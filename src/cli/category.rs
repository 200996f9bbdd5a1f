//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color as #RRGGBB
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service
                .list()?
                .into_iter()
                .map(|c| -> LedgerResult<_> {
                    let usage = service.usage_count(&c)?;
                    Ok((c, usage))
                })
                .collect::<LedgerResult<Vec<_>>>()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name, color } => {
            let category = service.create(&name, color.as_deref())?;
            println!("Created category: {} ({})", category.name, category.id);
        }

        CategoryCommands::Delete { category } => {
            let category = service.delete(&category)?;
            let usage = service.usage_count(&category)?;
            println!("Deleted category: {}", category.name);
            if usage > 0 {
                println!(
                    "{} transaction(s) still reference '{}' by name.",
                    usage, category.name
                );
            }
        }
    }

    Ok(())
}
