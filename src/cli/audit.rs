//! Audit log CLI command

use crate::display::format_audit_entries;
use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let entries = storage.audit().recent(limit)?;
    print!("{}", format_audit_entries(&entries));
    Ok(())
}
