//! Dismissible regions
//!
//! The renderer registers the screen area of every interactive element once
//! per frame. Pointer handling then asks the registry what a point falls in
//! without knowing anything about the terminal library that drew it.

use crate::models::{BudgetId, ItemId};

/// A rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// What a registered region represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// The whole item-entry form
    ItemForm,
    /// The displayed total earned, or its editor while open
    TotalEarned,
    /// An item's amount; carries the amount marker
    Amount(ItemId),
    /// A budget entry in the sidebar
    Budget(BudgetId),
    /// The "Add New Budget" button
    AddBudget,
    /// The inline new-budget form
    BudgetForm,
    /// An item row outside its amount
    Item(ItemId),
    SkipToggle(ItemId),
    MarkPaid(ItemId),
}

impl RegionKind {
    pub fn is_amount(&self) -> bool {
        matches!(self, Self::Amount(_))
    }
}

/// Regions drawn in the current frame, in drawing order
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: Vec<(RegionKind, Bounds)>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every region; called at the start of each frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, kind: RegionKind, bounds: Bounds) {
        if bounds.width > 0 && bounds.height > 0 {
            self.regions.push((kind, bounds));
        }
    }

    /// The most recently drawn region under the point
    pub fn hit(&self, column: u16, row: u16) -> Option<RegionKind> {
        self.regions
            .iter()
            .rev()
            .find(|(_, bounds)| bounds.contains(column, row))
            .map(|(kind, _)| *kind)
    }

    /// Whether the point lies in any region accepted by `pred`
    pub fn is_within<F>(&self, column: u16, row: u16, pred: F) -> bool
    where
        F: Fn(&RegionKind) -> bool,
    {
        self.regions
            .iter()
            .any(|(kind, bounds)| pred(kind) && bounds.contains(column, row))
    }

    pub fn bounds_of(&self, kind: RegionKind) -> Option<Bounds> {
        self.regions
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, bounds)| *bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        let b = Bounds::new(2, 3, 4, 2);
        assert!(b.contains(2, 3));
        assert!(b.contains(5, 4));
        assert!(!b.contains(6, 4));
        assert!(!b.contains(5, 5));
        assert!(!b.contains(1, 3));
    }

    #[test]
    fn test_bounds_at_far_edge_do_not_overflow() {
        let b = Bounds::new(u16::MAX - 1, 0, 10, 1);
        assert!(b.contains(u16::MAX, 0));
    }

    #[test]
    fn test_hit_prefers_last_registered() {
        let mut registry = RegionRegistry::new();
        let item = ItemId::from_raw(1);
        registry.register(RegionKind::Item(item), Bounds::new(0, 0, 40, 1));
        registry.register(RegionKind::Amount(item), Bounds::new(30, 0, 10, 1));

        assert_eq!(registry.hit(5, 0), Some(RegionKind::Item(item)));
        assert_eq!(registry.hit(32, 0), Some(RegionKind::Amount(item)));
        assert_eq!(registry.hit(5, 1), None);
        assert!(registry.is_within(32, 0, RegionKind::is_amount));
        assert!(!registry.is_within(5, 0, RegionKind::is_amount));
    }

    #[test]
    fn test_empty_regions_are_ignored() {
        let mut registry = RegionRegistry::new();
        registry.register(RegionKind::ItemForm, Bounds::new(0, 0, 0, 5));
        assert_eq!(registry.hit(0, 0), None);
        assert_eq!(registry.bounds_of(RegionKind::ItemForm), None);

        registry.register(RegionKind::TotalEarned, Bounds::new(0, 0, 5, 1));
        assert_eq!(
            registry.bounds_of(RegionKind::TotalEarned),
            Some(Bounds::new(0, 0, 5, 1))
        );
        registry.clear();
        assert_eq!(registry.bounds_of(RegionKind::TotalEarned), None);
    }
}
