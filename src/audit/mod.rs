//! Audit logging for finance-ledger
//!
//! Every create, update and delete that reaches disk is also appended to
//! `audit.log` with the record's before/after values.
//!
//! - `AuditEntry`: one logged mutation.
//! - `AuditLogger`: appends entries as JSON lines and reads them back.
//! - `summarize_changes`: field-level summary used for updates.

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
