//! Audit log CLI command

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the newest `limit` audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}
