//! Full snapshot export to JSON
//!
//! The snapshot bundles every stored record kind with a schema version so a
//! later release can recognise what it is reading.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Category, MonthlyNote, SavingsGoal, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of all ledger data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,

    /// Version of the binary that wrote the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
    pub savings_goals: Vec<SavingsGoal>,
    pub monthly_notes: Vec<MonthlyNote>,

    pub metadata: ExportMetadata,
}

/// Counts and date range, for a reader skimming the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub budget_count: usize,
    pub savings_goal_count: usize,
    pub note_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> LedgerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let budgets = storage.budgets.get_all()?;
        let savings_goals = storage.savings_goals.get_all()?;
        let monthly_notes = storage.notes.get_all()?;

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: categories.len(),
            budget_count: budgets.len(),
            savings_goal_count: savings_goals.len(),
            note_count: monthly_notes.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            categories,
            budgets,
            savings_goals,
            monthly_notes,
            metadata,
        })
    }

    /// Check the snapshot for schema mismatches and broken uniqueness rules
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut names = HashSet::new();
        for category in &self.categories {
            if !names.insert(category.name.to_lowercase()) {
                return Err(format!("Duplicate category name: {}", category.name));
            }
        }

        let mut months = HashSet::new();
        for budget in &self.budgets {
            if !months.insert(budget.month) {
                return Err(format!("More than one budget for {}", budget.month));
            }
            budget
                .validate()
                .map_err(|e| format!("Budget {}: {}", budget.month, e))?;
        }

        let mut months = HashSet::new();
        for note in &self.monthly_notes {
            if !months.insert(note.month) {
                return Err(format!("More than one note for {}", note.month));
            }
        }

        for goal in &self.savings_goals {
            goal.validate()
                .map_err(|e| format!("Savings goal {}: {}", goal.name, e))?;
        }

        Ok(())
    }
}

/// Write a validated snapshot as JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;
    export.validate().map_err(LedgerError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))
}

/// Parse and validate a JSON snapshot
pub fn read_full_json(json_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Export(e.to_string()))?;
    export.validate().map_err(LedgerError::Export)?;
    Ok(export)
}
