//! In-memory budget store
//!
//! The store owns every budget behind an `Arc`. Cloning a store is a cheap
//! snapshot, and updates go through `Arc::make_mut`, so a mutation copies only
//! the budgets it touches; every other budget stays pointer-identical to the
//! previous value.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetId, BudgetKey, Item, ItemDraft, ItemId, Money};

/// All budget state of a session
#[derive(Debug, Clone)]
pub struct BudgetStore {
    budgets: Vec<Arc<Budget>>,
    total_earned: Money,
    last_item_id: Option<ItemId>,
}

impl BudgetStore {
    /// An empty store with the given income
    pub fn new(total_earned: Money) -> Self {
        Self {
            budgets: Vec::new(),
            total_earned,
            last_item_id: None,
        }
    }

    /// The store a session starts from: seeded budgets, items and income
    pub fn seeded(settings: &Settings) -> TrackerResult<Self> {
        let mut store = Self::new(settings.total_earned);

        for seed in &settings.budgets {
            let id = store.push_budget(Budget::new(seed.name.clone()));
            for draft in &seed.items {
                let item = store.build_item(draft, Utc::now())?;
                store.append_item(&BudgetKey::Id(id), item)?;
            }
        }

        Ok(store)
    }

    pub fn budgets(&self) -> &[Arc<Budget>] {
        &self.budgets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.iter().map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.iter().find(|b| b.id == id)
    }

    /// Position of a budget in display order
    pub fn position(&self, id: BudgetId) -> Option<usize> {
        self.budgets.iter().position(|b| b.id == id)
    }

    /// Every budget the key selects, in store order
    pub fn matching(&self, key: &BudgetKey) -> impl Iterator<Item = &Budget> + '_ {
        let key = key.clone();
        self.iter().filter(move |b| key.matches(b))
    }

    /// Find an item by id, together with the budget holding it
    pub fn find_item(&self, key: &BudgetKey, item_id: ItemId) -> Option<(&Budget, &Item)> {
        self.iter()
            .filter(|b| key.matches(b))
            .find_map(|b| b.item(item_id).map(|item| (b, item)))
    }

    pub fn total_earned(&self) -> Money {
        self.total_earned
    }

    pub fn set_total_earned(&mut self, amount: Money) {
        self.total_earned = amount;
    }

    /// Append a budget and return its id
    pub fn push_budget(&mut self, budget: Budget) -> BudgetId {
        let id = budget.id;
        self.budgets.push(Arc::new(budget));
        id
    }

    /// Build a validated item with a fresh id
    ///
    /// The id is reserved even if the item is never appended.
    pub fn build_item(&mut self, draft: &ItemDraft, now: DateTime<Utc>) -> TrackerResult<Item> {
        draft.validate()?;
        let id = ItemId::next_after(self.last_item_id, now);
        self.last_item_id = Some(id);
        Item::from_draft(id, draft)
    }

    /// Append a copy of `item` to every budget the key selects
    ///
    /// Returns the number of budgets that received the item.
    pub fn append_item(&mut self, key: &BudgetKey, item: Item) -> TrackerResult<usize> {
        let mut touched = 0;
        for budget in self.budgets.iter_mut().filter(|b| key.matches(b)) {
            Arc::make_mut(budget).items.push(item.clone());
            touched += 1;
        }

        if touched == 0 {
            return Err(TrackerError::budget_not_found(key.to_string()));
        }
        Ok(touched)
    }

    /// Apply `update` to the item with `item_id` in every budget the key selects
    ///
    /// Budgets that do not contain the item are left shared. Returns the
    /// number of items updated.
    pub fn update_item<F>(
        &mut self,
        key: &BudgetKey,
        item_id: ItemId,
        mut update: F,
    ) -> TrackerResult<usize>
    where
        F: FnMut(&mut Item),
    {
        let mut touched = 0;
        for budget in self
            .budgets
            .iter_mut()
            .filter(|b| key.matches(b) && b.contains_item(item_id))
        {
            if let Some(item) = Arc::make_mut(budget).item_mut(item_id) {
                update(item);
                touched += 1;
            }
        }

        if touched == 0 {
            return Err(TrackerError::item_not_found(item_id.to_string()));
        }
        Ok(touched)
    }
}

impl Default for BudgetStore {
    /// The default seed: three empty budgets and 10000.00 earned
    fn default() -> Self {
        let settings = Settings::default();
        let mut store = Self::new(settings.total_earned);
        for seed in settings.budgets {
            store.push_budget(Budget::new(seed.name));
        }
        store
    }
}
