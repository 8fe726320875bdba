//! Item table for a single budget

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Budget, Item};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Payment")]
    mode: &'static str,
    #[tabled(rename = "Frequency")]
    frequency: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Last Paid")]
    last_paid: String,
}

/// "Skipped", "Paid" or empty
pub fn item_status(item: &Item) -> &'static str {
    if item.is_skipped {
        "Skipped"
    } else if item.is_paid {
        "Paid"
    } else {
        ""
    }
}

/// Last paid date in the configured local date format
pub fn format_last_paid(item: &Item, settings: &Settings) -> Option<String> {
    item.last_paid_date.map(|at| {
        at.with_timezone(&chrono::Local)
            .format(&settings.date_format)
            .to_string()
    })
}

pub fn format_item_table(budget: &Budget, settings: &Settings) -> String {
    if budget.items.is_empty() {
        return format!("{}: no items.", budget.name);
    }

    let rows: Vec<ItemRow> = budget
        .items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            amount: item.amount.format_with_symbol(&settings.currency_symbol),
            mode: item.payment_mode(),
            frequency: item.frequency.label(),
            status: item_status(item),
            last_paid: format_last_paid(item, settings).unwrap_or_default(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();

    format!("{}\n{}", budget.name, table)
}
