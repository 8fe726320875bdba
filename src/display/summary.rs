//! Budget summary tables
//!
//! Plain-text rendering of the budget list and totals for the `summary`
//! command.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::services::Summary;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Budget")]
    name: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Skipped")]
    skipped: usize,
    #[tabled(rename = "Paid")]
    paid: usize,
    #[tabled(rename = "Spend")]
    spend: String,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Table of every budget's spend
pub fn format_budget_table(summary: &Summary, settings: &Settings) -> String {
    if summary.budgets.is_empty() {
        return "No budgets.".to_string();
    }

    let rows: Vec<BudgetRow> = summary
        .budgets
        .iter()
        .map(|b| BudgetRow {
            name: b.name.clone(),
            items: b.item_count,
            skipped: b.skipped_count,
            paid: b.paid_count,
            spend: b.spend.format_with_symbol(&settings.currency_symbol),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Table of total earned, total spend and overflow
pub fn format_totals(summary: &Summary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let rows = vec![
        TotalRow {
            label: "Total Earned",
            amount: summary.total_earned.format_with_symbol(symbol),
        },
        TotalRow {
            label: "Total Spend",
            amount: summary.total_spend.format_with_symbol(symbol),
        },
        TotalRow {
            label: "Overflow",
            amount: summary.overflow.format_with_symbol(symbol),
        },
    ];

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Both tables, budgets first
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    format!(
        "{}\n\n{}\n",
        format_budget_table(summary, settings),
        format_totals(summary, settings)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetKey, ItemDraft, Money};
    use crate::store::BudgetStore;
    use chrono::Utc;

    #[test]
    fn test_summary_lists_budgets_and_totals() {
        let mut store = BudgetStore::default();
        let item = store.build_item(&ItemDraft::new("Rent", "1200"), Utc::now()).unwrap();
        store.append_item(&BudgetKey::from("Monthly Bills"), item).unwrap();

        let output = format_summary(&Summary::from_store(&store), &Settings::default());
        assert!(output.contains("Monthly Bills"));
        assert!(output.contains("Subscriptions"));
        assert!(output.contains("$1200.00"));
        assert!(output.contains("$8800.00"));
        assert!(output.contains("Overflow"));
    }

    #[test]
    fn test_custom_currency_symbol() {
        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        let store = BudgetStore::new(Money::from_units(50));

        let output = format_totals(&Summary::from_store(&store), &settings);
        assert!(output.contains("€50.00"));
    }

    #[test]
    fn test_no_budgets() {
        let store = BudgetStore::new(Money::zero());
        let output = format_budget_table(&Summary::from_store(&store), &Settings::default());
        assert_eq!(output, "No budgets.");
    }
}
