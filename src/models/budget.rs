//! Budget model
//!
//! A budget is a named, ordered list of payment items. Names are display
//! attributes only; [`BudgetKey`] decides whether an operation targets one
//! budget by id or every budget carrying a name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::{BudgetId, ItemId};
use super::item::Item;
use crate::error::{TrackerError, TrackerResult};

/// A named bucket of payment items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub name: String,
    pub items: Vec<Item>,
}

impl Budget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Sum of the amounts of all items that are not skipped
    pub fn spend(&self) -> Amount {
        self.items.iter().map(Item::spend).sum()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }
}

/// Name typed into the "new budget" form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetDraft {
    pub name: String,
}

impl BudgetDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> TrackerResult<()> {
        if self.name.is_empty() {
            return Err(TrackerError::Validation("Budget name is required".into()));
        }
        Ok(())
    }
}

/// Selects which budgets an operation applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BudgetKey {
    /// Exactly the budget with this id
    Id(BudgetId),
    /// Every budget whose name is equal to this one
    Name(String),
}

impl BudgetKey {
    pub fn matches(&self, budget: &Budget) -> bool {
        match self {
            Self::Id(id) => budget.id == *id,
            Self::Name(name) => budget.name == *name,
        }
    }
}

impl From<BudgetId> for BudgetKey {
    fn from(id: BudgetId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for BudgetKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for BudgetKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemDraft;

    fn item(raw: i64, amount: &str) -> Item {
        Item::from_draft(ItemId::from_raw(raw), &ItemDraft::new("x", amount)).unwrap()
    }

    #[test]
    fn test_spend_excludes_skipped_items() {
        let mut budget = Budget::new("Monthly Bills");
        budget.items.push(item(1, "1200"));
        budget.items.push(item(2, "80.50"));
        assert_eq!(budget.spend(), Amount::parse("1280.50"));

        budget.item_mut(ItemId::from_raw(2)).unwrap().toggle_skipped();
        assert_eq!(budget.spend(), Amount::parse("1200"));
    }

    #[test]
    fn test_empty_budget_spends_nothing() {
        assert_eq!(Budget::new("Savings").spend(), Amount::zero());
    }

    #[test]
    fn test_key_matching() {
        let a = Budget::new("Savings");
        let b = Budget::new("Savings");

        let by_name = BudgetKey::from("Savings");
        assert!(by_name.matches(&a) && by_name.matches(&b));

        let by_id = BudgetKey::from(a.id);
        assert!(by_id.matches(&a));
        assert!(!by_id.matches(&b));
    }

    #[test]
    fn test_draft_validation() {
        assert!(BudgetDraft::new("Travel").validate().is_ok());
        assert!(BudgetDraft::new("").validate().unwrap_err().is_validation());
        assert!(BudgetDraft::new("   ").validate().is_ok());
    }
}
