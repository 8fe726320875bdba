//! Help dialog
//!
//! Lists keyboard shortcuts and mouse actions

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab / h / l", "Switch panel focus"),
        key_line("j / k", "Move selection down/up"),
        key_line("n", "New budget"),
        key_line("a", "Add item to the active budget"),
        key_line("t", "Edit total earned"),
        Line::from(""),
        section("Budgets"),
        key_line("Enter", "Show the selected budget"),
        Line::from(""),
        section("Items"),
        key_line("e / Enter", "Edit amount"),
        key_line("s", "Skip / unskip"),
        key_line("p", "Mark paid"),
        Line::from(""),
        section("Editing"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel / close"),
        key_line("Space", "Toggle automatic payment"),
        key_line("← / →", "Change frequency"),
        Line::from(""),
        section("Mouse"),
        Line::from("  Click a budget, an amount, the total earned or a button."),
        Line::from("  Clicking elsewhere saves and closes open editors."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
