//! Strongly-typed identifiers
//!
//! Budgets are identified by a random UUID so that two budgets with the same
//! name stay distinguishable. Items are identified by a millisecond timestamp
//! that the store keeps strictly increasing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetId(Uuid);

impl BudgetId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BudgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BudgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bdg-{}", &self.0.to_string()[..8])
    }
}

/// Identifier of an item: creation time in milliseconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Id for an item created at `now`, never at or below `last`
    pub fn next_after(last: Option<ItemId>, now: DateTime<Utc>) -> Self {
        let stamp = now.timestamp_millis();
        match last {
            Some(ItemId(prev)) if prev >= stamp => Self(prev + 1),
            _ => Self(stamp),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
