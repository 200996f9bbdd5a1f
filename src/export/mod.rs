//! Export module for monthly-ledger
//!
//! - CSV: transactions, for spreadsheets
//! - JSON: full snapshot, machine-readable
//! - YAML: full snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, read_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, read_full_yaml};
