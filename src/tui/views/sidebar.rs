//! Sidebar view
//!
//! Shows the budget list, the new-budget form and the income totals

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interaction::RegionKind;
use crate::services::Summary;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::forms::budget;
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, summary: &Summary) {
    let add_budget_height = if app.budget_form.is_open() {
        budget::HEIGHT
    } else {
        3
    };
    let layout = SidebarLayout::new(area, add_budget_height);

    render_header(frame, layout.header);
    render_budgets(frame, app, layout.budgets, summary);
    budget::render(frame, app, layout.add_budget);
    render_totals(frame, app, layout.totals, summary);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Budget Tracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let subtitle = Paragraph::new("Monthly payments")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(subtitle, area);
}

fn render_budgets(frame: &mut Frame, app: &mut App, area: Rect, summary: &Summary) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Budgets ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if summary.budgets.is_empty() || inner.height == 0 {
        frame.render_widget(
            Paragraph::new("No budgets").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let visible = usize::from(inner.height);
    let offset = app.selected_budget_index.saturating_sub(visible - 1);
    let spend_width = 12;
    let name_width = usize::from(inner.width).saturating_sub(spend_width + 2);

    for (row, (index, budget)) in summary
        .budgets
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let is_active = app.active_budget == Some(budget.budget_id);
        let is_selected = is_focused && index == app.selected_budget_index;

        let mut style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if is_selected {
            style = style.bg(Color::DarkGray);
        }

        let spend_color = if budget.spend.is_nan() {
            Color::Red
        } else {
            Color::Green
        };

        let line = Line::from(vec![
            Span::styled(if is_active { "▶ " } else { "  " }, style),
            Span::styled(
                format!("{:<name_width$}", truncate_string(&budget.name, name_width)),
                style,
            ),
            Span::styled(
                format!("{:>spend_width$}", app.format_amount(budget.spend)),
                Style::default().fg(spend_color),
            ),
        ]);

        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
        app.regions
            .register(RegionKind::Budget(budget.budget_id), row_area.into());
    }
}

fn render_totals(frame: &mut Frame, app: &mut App, area: Rect, summary: &Summary) {
    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let label_style = Style::default().fg(Color::Yellow);
    let rows = [
        Rect::new(inner.x, inner.y, inner.width, 1),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
        Rect::new(inner.x, inner.y + 2, inner.width, 1),
    ];

    frame.render_widget(Paragraph::new(Span::styled("Total Earned", label_style)), rows[0]);
    if app.interaction.total_earned.is_open() {
        app.total_input.focused = true;
        let mut spans = vec![Span::raw(app.settings.currency_symbol.clone())];
        spans.extend(app.total_input.value_spans(Style::default().fg(Color::White)));
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), rows[0]);
    } else {
        frame.render_widget(
            Paragraph::new(app.format_amount(summary.total_earned))
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Right),
            rows[0],
        );
    }
    app.regions.register(RegionKind::TotalEarned, rows[0].into());

    frame.render_widget(Paragraph::new(Span::styled("Total Spend", label_style)), rows[1]);
    frame.render_widget(
        Paragraph::new(app.format_amount(summary.total_spend))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Right),
        rows[1],
    );

    let overflow_color = if summary.overflow.is_nan() || summary.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };
    frame.render_widget(Paragraph::new(Span::styled("Overflow", label_style)), rows[2]);
    frame.render_widget(
        Paragraph::new(app.format_amount(summary.overflow))
            .style(
                Style::default()
                    .fg(overflow_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right),
        rows[2],
    );
}

/// Truncate a string to at most `max_len` characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Savings", 10), "Savings");
        assert_eq!(truncate_string("Monthly Bills", 8), "Monthly…");
        assert_eq!(truncate_string("Café au lait", 5), "Café…");
        assert_eq!(truncate_string("abc", 0), "");
    }
}
