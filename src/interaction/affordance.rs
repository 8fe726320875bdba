//! Open/closed state of the transient editors
//!
//! There are three independent affordances: the expanded item form, the
//! total-earned editor and the per-item amount editor. The amount editor is
//! a single slot, so at most one item is ever being edited.

use super::regions::{RegionKind, RegionRegistry};
use crate::models::ItemId;

/// Two-state visibility of an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affordance {
    #[default]
    Closed,
    Open,
}

impl Affordance {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// What a pointer-down closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dismissed {
    pub item_form: bool,
    pub total_earned: bool,
    /// Item whose amount edit was open; the caller commits it
    pub amount_edit: Option<ItemId>,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub item_form: Affordance,
    pub total_earned: Affordance,
    editing_item: Option<ItemId>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_item(&self) -> Option<ItemId> {
        self.editing_item
    }

    pub fn is_editing(&self, item_id: ItemId) -> bool {
        self.editing_item == Some(item_id)
    }

    /// Point the amount editor at `item_id`
    ///
    /// Returns the item that was being edited before, if it was a different
    /// one, so its pending text can be committed.
    pub fn begin_amount_edit(&mut self, item_id: ItemId) -> Option<ItemId> {
        self.editing_item
            .replace(item_id)
            .filter(|previous| *previous != item_id)
    }

    /// Close the amount editor, returning the item it was editing
    pub fn end_amount_edit(&mut self) -> Option<ItemId> {
        self.editing_item.take()
    }

    /// Run outside-interaction detection for a pointer-down at the point
    ///
    /// Each affordance is checked on its own. The amount editor stays open
    /// when the point lands on any amount, not only the one being edited.
    pub fn on_pointer_down(&mut self, regions: &RegionRegistry, column: u16, row: u16) -> Dismissed {
        let mut dismissed = Dismissed::default();

        if self.item_form.is_open()
            && !regions.is_within(column, row, |k| *k == RegionKind::ItemForm)
        {
            self.item_form.close();
            dismissed.item_form = true;
        }

        if self.total_earned.is_open()
            && !regions.is_within(column, row, |k| *k == RegionKind::TotalEarned)
        {
            self.total_earned.close();
            dismissed.total_earned = true;
        }

        if self.editing_item.is_some() && !regions.is_within(column, row, RegionKind::is_amount) {
            dismissed.amount_edit = self.end_amount_edit();
        }

        dismissed
    }
}
