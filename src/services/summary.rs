//! Derived totals
//!
//! Nothing here is stored. Every figure is recomputed from the current store
//! so the display can never drift from the underlying items.

use crate::models::{Amount, Budget, BudgetId, Money};
use crate::store::BudgetStore;

/// Spend of a single budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSpend {
    pub budget_id: BudgetId,
    pub name: String,
    /// Number of items, skipped ones included
    pub item_count: usize,
    pub skipped_count: usize,
    pub paid_count: usize,
    pub spend: Amount,
}

impl BudgetSpend {
    pub fn for_budget(budget: &Budget) -> Self {
        Self {
            budget_id: budget.id,
            name: budget.name.clone(),
            item_count: budget.items.len(),
            skipped_count: budget.items.iter().filter(|i| i.is_skipped).count(),
            paid_count: budget.items.iter().filter(|i| i.is_paid).count(),
            spend: budget_spend(budget),
        }
    }
}

/// Snapshot of every derived figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub budgets: Vec<BudgetSpend>,
    pub total_earned: Money,
    pub total_spend: Amount,
    pub overflow: Amount,
}

impl Summary {
    pub fn from_store(store: &BudgetStore) -> Self {
        let budgets: Vec<BudgetSpend> = store.iter().map(BudgetSpend::for_budget).collect();
        let total_spend: Amount = budgets.iter().map(|b| b.spend).sum();

        Self {
            budgets,
            total_earned: store.total_earned(),
            total_spend,
            overflow: Amount::from(store.total_earned()) - total_spend,
        }
    }

    /// True when spending exceeds what was earned
    pub fn is_overspent(&self) -> bool {
        self.overflow.is_negative()
    }
}

/// Sum of non-skipped item amounts in one budget
pub fn budget_spend(budget: &Budget) -> Amount {
    budget.spend()
}

/// Sum of every budget's spend
pub fn total_spend(store: &BudgetStore) -> Amount {
    store.iter().map(budget_spend).sum()
}

/// Total earned minus total spend; may be negative
pub fn overflow(store: &BudgetStore) -> Amount {
    Amount::from(store.total_earned()) - total_spend(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetKey, ItemDraft};
    use chrono::Utc;

    fn store_with(items: &[(&str, &str, &str)]) -> BudgetStore {
        let mut store = BudgetStore::default();
        for (budget, name, amount) in items {
            let item = store
                .build_item(&ItemDraft::new(*name, *amount), Utc::now())
                .unwrap();
            store.append_item(&BudgetKey::from(*budget), item).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_store_totals() {
        let store = BudgetStore::default();
        let summary = Summary::from_store(&store);

        assert_eq!(summary.total_spend, Amount::zero());
        assert_eq!(summary.overflow.to_string(), "$10000.00");
        assert!(summary.budgets.iter().all(|b| b.spend == Amount::zero()));
    }

    #[test]
    fn test_totals_across_budgets() {
        let store = store_with(&[
            ("Monthly Bills", "Rent", "1200"),
            ("Monthly Bills", "Power", "85.25"),
            ("Subscriptions", "Music", "9.99"),
        ]);
        let summary = Summary::from_store(&store);

        assert_eq!(summary.budgets[0].spend.to_string(), "$1285.25");
        assert_eq!(summary.budgets[1].spend.to_string(), "$9.99");
        assert_eq!(summary.budgets[2].spend.to_string(), "$0.00");
        assert_eq!(summary.total_spend.to_string(), "$1295.24");
        assert_eq!(summary.overflow.to_string(), "$8704.76");
        assert_eq!(total_spend(&store), summary.total_spend);
        assert_eq!(overflow(&store), summary.overflow);
    }

    #[test]
    fn test_overflow_can_go_negative() {
        let mut store = store_with(&[("Savings", "House", "12000")]);
        store.set_total_earned(Money::from_units(10_000));
        let summary = Summary::from_store(&store);

        assert!(summary.is_overspent());
        assert_eq!(summary.overflow.to_string(), "-$2000.00");
    }

    #[test]
    fn test_overflowing_totals_are_nan() {
        let store = store_with(&[
            ("Monthly Bills", "Loan", "90000000000000000"),
            ("Monthly Bills", "Loan", "90000000000000000"),
        ]);
        let summary = Summary::from_store(&store);

        assert!(summary.budgets[0].spend.is_nan());
        assert!(summary.total_spend.is_nan());
        assert_eq!(summary.overflow.to_string(), "$NaN");
    }

    #[test]
    fn test_counts() {
        let mut store = store_with(&[
            ("Monthly Bills", "Rent", "1200"),
            ("Monthly Bills", "Power", "85"),
        ]);
        let key = BudgetKey::from("Monthly Bills");
        let rent = store.budgets()[0].items[0].id;
        let power = store.budgets()[0].items[1].id;
        store.update_item(&key, rent, |i| i.mark_paid(Utc::now())).unwrap();
        store.update_item(&key, power, |i| i.toggle_skipped()).unwrap();

        let bills = &Summary::from_store(&store).budgets[0];
        assert_eq!(bills.item_count, 2);
        assert_eq!(bills.paid_count, 1);
        assert_eq!(bills.skipped_count, 1);
        assert_eq!(bills.spend.to_string(), "$1200.00");
    }
}
