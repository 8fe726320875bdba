//! Status bar view
//!
//! Shows the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(ref warning) = app.log_warning {
        spans.push(Span::styled(
            format!(" {}", warning),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(budget) = app.active_budget() {
        spans.push(Span::styled(
            format!(" {} · {} items", budget.name, budget.items.len()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = usize::from(area.width)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for whatever currently receives keys
fn hints(app: &App) -> &'static str {
    if app.interaction.editing_item().is_some() || app.interaction.total_earned.is_open() {
        " Enter:Save  Esc:Cancel "
    } else if app.budget_form.is_open() {
        " Enter:Create  Esc:Cancel "
    } else if app.interaction.item_form.is_open() {
        " Tab:Next  Enter:Add  Esc:Close "
    } else {
        " q:Quit  ?:Help  a:Add  e:Edit  s:Skip  p:Paid "
    }
}
