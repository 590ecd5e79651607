//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mutation recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => f.pad("CREATE"),
            Operation::Update => f.pad("UPDATE"),
            Operation::Delete => f.pad("DELETE"),
        }
    }
}

/// Kind of record a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Income,
    Expense,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Income => f.pad("Income"),
            EntityType::Expense => f.pad("Expense"),
            EntityType::Budget => f.pad("Budget"),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Full id of the record
    pub entity_id: String,

    /// Short description, e.g. "Salary $5000.00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Record before the mutation (updates and deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Record after the mutation (creates and updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Changed fields, for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            label,
            before: None,
            after: None,
            changes: None,
        }
    }

    /// Entry for a newly created record
    pub fn created<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        record: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id, label);
        entry.after = serde_json::to_value(record).ok();
        entry
    }

    /// Entry for a record changed in place
    pub fn updated<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id, label);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        if let (Some(before), Some(after)) = (&entry.before, &entry.after) {
            entry.changes = super::diff::summarize_changes(before, after);
        }
        entry
    }

    /// Entry for a removed record
    pub fn deleted<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        record: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id, label);
        entry.before = serde_json::to_value(record).ok();
        entry
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;

        if let Some(label) = &self.label {
            write!(f, " ({})", label)?;
        }

        if let Some(changes) = &self.changes {
            write!(f, "\n  Changes: {}", changes)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_names() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::Budget.to_string(), "Budget");
    }

    #[test]
    fn test_created_entry() {
        let record = json!({"source": "Salary", "amount": 500000});
        let entry = AuditEntry::created(
            EntityType::Income,
            "inc-1234",
            Some("Salary".into()),
            &record,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(record));
        assert!(entry.changes.is_none());
    }

    #[test]
    fn test_updated_entry_records_changes() {
        let before = json!({"category": "Food", "monthly_limit": 60000});
        let after = json!({"category": "Food", "monthly_limit": 65050});
        let entry = AuditEntry::updated(EntityType::Budget, "bud-1", None, &before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.changes.as_deref(),
            Some("monthly_limit: 60000 -> 65050")
        );
    }

    #[test]
    fn test_deleted_entry() {
        let record = json!({"category": "Food"});
        let entry = AuditEntry::deleted(EntityType::Expense, "exp-1", None, &record);

        assert_eq!(entry.before, Some(record));
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::deleted(EntityType::Expense, "exp-1", None, &json!({}));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains("\"operation\":\"delete\""));
        assert!(line.contains("\"entity_type\":\"expense\""));
        assert!(!line.contains("label"));
        assert!(!line.contains("after"));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::created(
            EntityType::Expense,
            "exp-1",
            Some("Food & Dining $450.00".into()),
            &json!({}),
        );
        let text = entry.to_string();

        assert!(text.contains("CREATE Expense exp-1"));
        assert!(text.contains("(Food & Dining $450.00)"));
    }
}
