//! Budget service
//!
//! Validated operations on the budget store. Each successful mutation is
//! appended to the activity log when a logger is attached; rejected
//! operations leave the store untouched.
//!
//! A failed log write never undoes or rejects a mutation. The failure is kept
//! on the service and handed out by `take_log_error`.

use chrono::Utc;

use crate::audit::{ActivityEntry, ActivityLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Budget, BudgetDraft, BudgetId, BudgetKey, Item, ItemDraft, ItemId, Money};
use crate::store::BudgetStore;

/// Service for budget and item management
pub struct BudgetService<'a> {
    store: &'a mut BudgetStore,
    logger: Option<&'a ActivityLogger>,
    log_error: Option<TrackerError>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a mut BudgetStore) -> Self {
        Self {
            store,
            logger: None,
            log_error: None,
        }
    }

    /// Record successful mutations with `logger`
    pub fn with_logger(mut self, logger: Option<&'a ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Append a new, empty budget
    ///
    /// Duplicate names are accepted.
    pub fn add_budget(&mut self, draft: &BudgetDraft) -> TrackerResult<BudgetId> {
        draft.validate()?;

        let budget = Budget::new(draft.name.clone());
        let entry = ActivityEntry::create(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.name.clone()),
            &budget,
        );
        let id = self.store.push_budget(budget);
        self.log(|| entry);

        Ok(id)
    }

    /// Add an item built from `draft` to every budget the key selects
    pub fn add_item(&mut self, key: &BudgetKey, draft: &ItemDraft) -> TrackerResult<Item> {
        draft.validate()?;
        if self.store.matching(key).next().is_none() {
            return Err(TrackerError::budget_not_found(key.to_string()));
        }

        let item = self.store.build_item(draft, Utc::now())?;
        self.store.append_item(key, item.clone())?;

        self.log(|| {
            ActivityEntry::create(
                EntityType::Item,
                item.id.to_string(),
                Some(item.name.clone()),
                &item,
            )
        });

        Ok(item)
    }

    /// Replace an item's amount with the parse of `text`
    ///
    /// Unparseable text is stored as `Amount::NotANumber`.
    pub fn update_item_amount(
        &mut self,
        key: &BudgetKey,
        item_id: ItemId,
        text: &str,
    ) -> TrackerResult<Item> {
        let amount = Amount::parse(text);
        self.update_item(key, item_id, |item| item.set_amount(amount))
    }

    /// Flip an item between skipped and not skipped; clears paid
    pub fn toggle_item_skipped(&mut self, key: &BudgetKey, item_id: ItemId) -> TrackerResult<Item> {
        self.update_item(key, item_id, Item::toggle_skipped)
    }

    /// Mark an item paid now; clears skipped
    pub fn mark_item_as_paid(&mut self, key: &BudgetKey, item_id: ItemId) -> TrackerResult<Item> {
        let now = Utc::now();
        self.update_item(key, item_id, |item| item.mark_paid(now))
    }

    /// Set the total earned from typed text; anything unparseable counts as zero
    pub fn set_total_earned(&mut self, text: &str) -> TrackerResult<Money> {
        let before = self.store.total_earned();
        let after = Money::parse(text).unwrap_or_default();
        if before == after {
            return Ok(after);
        }

        self.store.set_total_earned(after);
        self.log(|| ActivityEntry::update(EntityType::Income, "total_earned", None, &before, &after));

        Ok(after)
    }

    fn update_item<F>(&mut self, key: &BudgetKey, item_id: ItemId, update: F) -> TrackerResult<Item>
    where
        F: FnMut(&mut Item),
    {
        let before = self
            .store
            .find_item(key, item_id)
            .map(|(_, item)| item.clone());

        self.store.update_item(key, item_id, update)?;

        let after = self
            .store
            .find_item(key, item_id)
            .map(|(_, item)| item.clone())
            .ok_or_else(|| TrackerError::item_not_found(item_id.to_string()))?;

        if let Some(before) = before {
            self.log(|| {
                ActivityEntry::update(
                    EntityType::Item,
                    item_id.to_string(),
                    Some(after.name.clone()),
                    &before,
                    &after,
                )
            });
        }

        Ok(after)
    }

    /// The first log write that failed since the last call, if any
    pub fn take_log_error(&mut self) -> Option<TrackerError> {
        self.log_error.take()
    }

    fn log<F>(&mut self, entry: F)
    where
        F: FnOnce() -> ActivityEntry,
    {
        let Some(logger) = self.logger else {
            return;
        };
        if let Err(err) = logger.log(&entry()) {
            self.log_error.get_or_insert(err);
        }
    }
}
