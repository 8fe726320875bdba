//! Activity entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::diff::generate_diff;

/// Types of operations that are logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
        }
    }
}

/// Types of entities that are logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Budget,
    Item,
    /// The process-wide total earned figure
    Income,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Item => write!(f, "Item"),
            EntityType::Income => write!(f, "Income"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Human-readable description of the entity (budget or item name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl ActivityEntry {
    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Entry for an update; the diff summary is derived from the snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Income.to_string(), "Income");
    }

    #[test]
    fn test_create_entry() {
        let entry = ActivityEntry::create(
            EntityType::Budget,
            "bdg-1234abcd",
            Some("Travel".to_string()),
            &json!({"name": "Travel", "items": []}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["name"], "Travel");
    }

    #[test]
    fn test_update_entry_computes_diff() {
        let entry = ActivityEntry::update(
            EntityType::Item,
            "1700000000000",
            Some("Rent".to_string()),
            &json!({"is_skipped": false, "is_paid": true}),
            &json!({"is_skipped": true, "is_paid": false}),
        );

        let diff = entry.diff_summary.unwrap();
        assert!(diff.contains("is_skipped: false -> true"));
        assert!(diff.contains("is_paid: true -> false"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = ActivityEntry::create(EntityType::Item, "1", None, &json!({"id": 1}));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"entity_type\":\"item\""));

        let parsed: ActivityEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.entity_type, EntityType::Item);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = ActivityEntry::update(
            EntityType::Item,
            "42",
            Some("Rent".to_string()),
            &json!({"amount": 120000}),
            &json!({"amount": 150000}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Item 42 (Rent)"));
        assert!(formatted.contains("Changes: amount: 120000 -> 150000"));
    }
}
