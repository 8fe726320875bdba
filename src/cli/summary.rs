//! Summary command
//!
//! Prints the seeded budgets, their items and the derived totals.

use crate::config::Settings;
use crate::display::{format_item_table, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::BudgetKey;
use crate::services::Summary;
use crate::store::BudgetStore;

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, budget: Option<String>) -> TrackerResult<()> {
    let store = BudgetStore::seeded(settings)?;
    print!("{}", render_summary(&store, settings, budget.as_deref())?);
    Ok(())
}

/// Totals followed by the item table of each non-empty budget
///
/// With `budget` set, only budgets of that name get an item table; the
/// totals always cover every budget.
pub fn render_summary(
    store: &BudgetStore,
    settings: &Settings,
    budget: Option<&str>,
) -> TrackerResult<String> {
    let mut output = format_summary(&Summary::from_store(store), settings);

    let budgets: Vec<_> = match budget {
        Some(name) => {
            let key = BudgetKey::from(name);
            let matched: Vec<_> = store.matching(&key).collect();
            if matched.is_empty() {
                return Err(TrackerError::budget_not_found(name));
            }
            matched
        }
        None => store.iter().filter(|b| !b.items.is_empty()).collect(),
    };

    for budget in budgets {
        output.push('\n');
        output.push_str(&format_item_table(budget, settings));
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SeedBudget;
    use crate::models::ItemDraft;

    fn settings_with_rent() -> Settings {
        let mut settings = Settings::default();
        settings.budgets[0] = SeedBudget {
            name: "Monthly Bills".into(),
            items: vec![ItemDraft::new("Rent", "1200")],
        };
        settings
    }

    #[test]
    fn test_render_lists_non_empty_budgets() {
        let settings = settings_with_rent();
        let store = BudgetStore::seeded(&settings).unwrap();

        let output = render_summary(&store, &settings, None).unwrap();
        assert!(output.contains("Rent"));
        assert!(output.contains("$8800.00"));
        assert!(output.contains("\nMonthly Bills\n"));
        assert!(!output.contains("Savings: no items."));
    }

    #[test]
    fn test_render_single_budget() {
        let settings = settings_with_rent();
        let store = BudgetStore::seeded(&settings).unwrap();

        let output = render_summary(&store, &settings, Some("Savings")).unwrap();
        assert!(output.contains("Savings: no items."));
        assert!(!output.contains("\nMonthly Bills\n"));
    }

    #[test]
    fn test_render_unknown_budget() {
        let settings = Settings::default();
        let store = BudgetStore::seeded(&settings).unwrap();

        let err = render_summary(&store, &settings, Some("Groceries")).unwrap_err();
        assert!(err.is_not_found());
    }
}
