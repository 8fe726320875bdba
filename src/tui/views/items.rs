//! Item view
//!
//! Shows the items of the active budget with their amount, payment mode,
//! frequency and paid/skipped state. Each item takes two lines: name and
//! amount on the first, details and action buttons on the second.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_last_paid;
use crate::interaction::RegionKind;
use crate::models::Item;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::forms::item;
use crate::tui::layout::MainPanelLayout;

use super::sidebar::truncate_string;

const ROW_HEIGHT: u16 = 2;
const AMOUNT_WIDTH: u16 = 14;
const SKIP_WIDTH: u16 = 8;
const PAID_WIDTH: u16 = 11;

/// Render the main panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let form_height = if app.interaction.item_form.is_open() {
        item::EXPANDED_HEIGHT
    } else {
        item::COLLAPSED_HEIGHT
    };
    let layout = MainPanelLayout::new(area, form_height);

    render_header(frame, app, layout.header);
    render_items(frame, app, layout.items);
    item::render(frame, app, layout.form);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = match app.active_budget() {
        Some(budget) => Line::from(vec![
            Span::styled(
                budget.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  │  Spend: "),
            Span::styled(
                app.format_amount(budget.spend()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        None => Line::from(Span::styled(
            "No budget selected",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_items(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Items ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<Item> = app
        .active_budget()
        .map(|b| b.items.clone())
        .unwrap_or_default();

    let visible = usize::from(inner.height / ROW_HEIGHT);
    if items.is_empty() || visible == 0 {
        frame.render_widget(
            Paragraph::new("No items yet. Press 'a' to add one.")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let offset = app.selected_item_index.saturating_sub(visible - 1);
    for (row, (index, item)) in items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = inner.y + row as u16 * ROW_HEIGHT;
        let selected = is_focused && index == app.selected_item_index;
        render_item(frame, app, Rect::new(inner.x, y, inner.width, ROW_HEIGHT), item, selected);
    }
}

fn render_item(frame: &mut Frame, app: &mut App, area: Rect, item: &Item, selected: bool) {
    app.regions.register(RegionKind::Item(item.id), area.into());

    let amount_area = Rect::new(
        area.x + area.width.saturating_sub(AMOUNT_WIDTH),
        area.y,
        AMOUNT_WIDTH.min(area.width),
        1,
    );
    let name_area = Rect::new(area.x, area.y, area.width.saturating_sub(AMOUNT_WIDTH), 1);
    let details_area = Rect::new(
        area.x,
        area.y + 1,
        area.width.saturating_sub(PAID_WIDTH + SKIP_WIDTH + 1),
        1,
    );

    // Name line
    let mut name_style = if item.is_skipped {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };
    if selected {
        name_style = name_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    let mut name_spans = vec![
        Span::styled(if selected { "> " } else { "  " }, name_style),
        Span::styled(
            truncate_string(&item.name, usize::from(name_area.width).saturating_sub(12)),
            name_style,
        ),
    ];
    if item.is_paid {
        name_spans.push(Span::styled("  ✓ Paid", Style::default().fg(Color::Green)));
    } else if item.is_skipped {
        name_spans.push(Span::styled("  Skipped", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(name_spans)), name_area);

    // Amount, or its editor
    if app.interaction.is_editing(item.id) {
        app.amount_input.focused = true;
        let mut spans = vec![Span::raw(app.settings.currency_symbol.clone())];
        spans.extend(app.amount_input.value_spans(Style::default().fg(Color::White)));
        frame.render_widget(Paragraph::new(Line::from(spans)), amount_area);
    } else {
        let color = if item.amount.is_nan() {
            Color::Red
        } else if item.is_skipped {
            Color::DarkGray
        } else {
            Color::Yellow
        };
        frame.render_widget(
            Paragraph::new(app.format_amount(item.amount))
                .style(Style::default().fg(color))
                .alignment(Alignment::Right),
            amount_area,
        );
    }
    app.regions.register(RegionKind::Amount(item.id), amount_area.into());

    // Details line
    let mut details = format!("    {} · {}", item.payment_mode(), item.frequency.label());
    if let Some(date) = format_last_paid(item, app.settings) {
        details.push_str(&format!(" · Last paid: {}", date));
    }
    frame.render_widget(
        Paragraph::new(Span::styled(details, Style::default().fg(Color::DarkGray))),
        details_area,
    );

    // Action buttons, right-aligned on the details line
    let paid_area = Rect::new(
        area.x + area.width.saturating_sub(PAID_WIDTH),
        area.y + 1,
        PAID_WIDTH.min(area.width),
        1,
    );
    let skip_area = Rect::new(
        paid_area.x.saturating_sub(SKIP_WIDTH + 1).max(area.x),
        area.y + 1,
        SKIP_WIDTH.min(area.width),
        1,
    );

    let skip_label = if item.is_skipped { "[Unskip]" } else { "[Skip]" };
    frame.render_widget(
        Paragraph::new(Span::styled(skip_label, Style::default().fg(Color::Magenta)))
            .alignment(Alignment::Right),
        skip_area,
    );
    app.regions.register(RegionKind::SkipToggle(item.id), skip_area.into());

    if item.is_paid {
        frame.render_widget(
            Paragraph::new(Span::styled("[Paid]", Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            paid_area,
        );
    } else {
        frame.render_widget(
            Paragraph::new(Span::styled("[Mark Paid]", Style::default().fg(Color::Green)))
                .alignment(Alignment::Right),
            paid_area,
        );
        app.regions.register(RegionKind::MarkPaid(item.id), paid_area.into());
    }
}
