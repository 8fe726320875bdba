//! Item entry form
//!
//! Collapsed, the form shows only the name field. Focusing it expands the
//! amount, payment mode and frequency fields below.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interaction::RegionKind;
use crate::models::{Frequency, ItemDraft};
use crate::tui::app::App;
use crate::tui::widgets::TextInput;

/// Height of the form including its border
pub const COLLAPSED_HEIGHT: u16 = 3;
pub const EXPANDED_HEIGHT: u16 = 9;

/// Which field is currently focused in the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemField {
    #[default]
    Name,
    Amount,
    Automatic,
    Frequency,
}

impl ItemField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Automatic,
            Self::Automatic => Self::Frequency,
            Self::Frequency => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Frequency,
            Self::Amount => Self::Name,
            Self::Automatic => Self::Amount,
            Self::Frequency => Self::Automatic,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemFormState {
    pub focused_field: ItemField,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub is_automatic: bool,
    pub frequency: Frequency,
    pub error_message: Option<String>,
}

impl Default for ItemFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemFormState {
    pub fn new() -> Self {
        Self {
            focused_field: ItemField::Name,
            name_input: TextInput::new().label("Name").placeholder("Add new item"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            is_automatic: false,
            frequency: Frequency::default(),
            error_message: None,
        }
    }

    /// Back to an empty draft with the name focused
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_focus(&mut self, field: ItemField) {
        self.focused_field = field;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ItemField::Name => Some(&mut self.name_input),
            ItemField::Amount => Some(&mut self.amount_input),
            _ => None,
        }
    }

    pub fn toggle_automatic(&mut self) {
        self.is_automatic = !self.is_automatic;
    }

    /// The draft as typed; validation happens on submit
    pub fn draft(&self) -> ItemDraft {
        ItemDraft::new(self.name_input.value(), self.amount_input.value())
            .automatic(self.is_automatic)
            .frequency(self.frequency)
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the form and register its bounds
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    app.regions.register(RegionKind::ItemForm, area.into());

    let expanded = app.interaction.item_form.is_open();
    let border_color = if expanded { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" New Item ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &mut app.item_form;
    form.name_input.focused = expanded && form.focused_field == ItemField::Name;
    form.amount_input.focused = expanded && form.focused_field == ItemField::Amount;

    let mut lines = vec![form.name_input.line()];

    if expanded {
        lines.push(form.amount_input.line());

        let automatic_focused = form.focused_field == ItemField::Automatic;
        let mode = if form.is_automatic {
            "[x] Automatic"
        } else {
            "[ ] Automatic"
        };
        lines.push(Line::from(vec![
            Span::styled("Payment: ", field_label_style(automatic_focused)),
            Span::styled(mode, Style::default().fg(Color::White)),
            Span::styled(
                if automatic_focused { " (Space to toggle)" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let frequency_focused = form.focused_field == ItemField::Frequency;
        lines.push(Line::from(vec![
            Span::styled("Frequency: ", field_label_style(frequency_focused)),
            Span::styled(
                format!("< {} >", form.frequency.label()),
                Style::default().fg(Color::White),
            ),
        ]));

        lines.push(match &form.error_message {
            Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))),
            None => Line::from(""),
        });

        lines.push(Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::White)),
            Span::raw(" Next  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Add Item  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Close"),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

/// Handle key input while the form is open
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.item_form;

    match key.code {
        KeyCode::Esc => {
            app.close_item_form();
        }
        KeyCode::Enter => {
            app.submit_item_form();
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Char(' ') if form.focused_field == ItemField::Automatic => {
            form.toggle_automatic();
        }
        KeyCode::Left | KeyCode::Up if form.focused_field == ItemField::Frequency => {
            form.frequency = form.frequency.prev();
        }
        KeyCode::Right | KeyCode::Down if form.focused_field == ItemField::Frequency => {
            form.frequency = form.frequency.next();
        }
        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }
        _ => return false,
    }

    true
}
