//! Full snapshot export to YAML

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Write the full snapshot as YAML, preceded by a short comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;
    export.validate().map_err(LedgerError::Export)?;

    let header = format!(
        "# monthly-ledger export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}

/// Parse and validate a YAML snapshot
pub fn read_full_yaml(yaml_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Export(e.to_string()))?;
    export.validate().map_err(LedgerError::Export)?;
    Ok(export)
}
