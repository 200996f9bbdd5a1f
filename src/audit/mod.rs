//! Audit logging for monthly-ledger
//!
//! Every create, update and delete performed by the services is appended to
//! `audit.log` as a JSON line with before/after snapshots.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries and reads them back
//! - `generate_diff`: field-level change summary for updates

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
