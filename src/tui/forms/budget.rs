//! Inline "new budget" form shown in the sidebar

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interaction::{Affordance, RegionKind};
use crate::models::BudgetDraft;
use crate::tui::app::App;
use crate::tui::widgets::TextInput;

/// Height of the open form including its border
pub const HEIGHT: u16 = 4;

#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub visibility: Affordance,
    pub name_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self {
            visibility: Affordance::Closed,
            name_input: TextInput::new().placeholder("Budget name"),
            error_message: None,
        }
    }
}

impl BudgetFormState {
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn open(&mut self) {
        self.visibility.open();
        self.name_input.focused = true;
    }

    /// Close and forget whatever was typed
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn draft(&self) -> BudgetDraft {
        BudgetDraft::new(self.name_input.value())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render either the "Add New Budget" button or the open form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if !app.budget_form.is_open() {
        let button = Paragraph::new(Line::from(Span::styled(
            " + Add New Budget ",
            Style::default().fg(Color::Green),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(button, area);
        app.regions.register(RegionKind::AddBudget, area.into());
        return;
    }

    app.regions.register(RegionKind::BudgetForm, area.into());

    let block = Block::default()
        .title(" New Budget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let form = &app.budget_form;
    let second_line = match &form.error_message {
        Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            "Enter: create  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(vec![form.name_input.line(), second_line]).block(block);
    frame.render_widget(paragraph, area);
}

/// Handle key input while the form is open
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let input = &mut app.budget_form.name_input;

    match key.code {
        KeyCode::Esc => app.budget_form.close(),
        KeyCode::Enter => app.submit_budget_form(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            input.insert(c);
            app.budget_form.error_message = None;
        }
        _ => return false,
    }

    true
}
