//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;
use super::forms;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Every left-button press runs outside-interaction dismissal
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_pointer_down(mouse.column, mouse.row);
    }
    Ok(())
}

/// Handle a key event
///
/// Open editors take keys in order: amount, total earned, new budget form,
/// item form. Otherwise the key is a command.
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    if app.interaction.editing_item().is_some() {
        match key.code {
            KeyCode::Enter => app.finish_amount_edit(),
            KeyCode::Esc => app.cancel_amount_edit(),
            _ => {
                edit_input(&mut app.amount_input, key);
            }
        }
        return Ok(());
    }

    if app.interaction.total_earned.is_open() {
        match key.code {
            KeyCode::Enter => app.finish_total_edit(),
            KeyCode::Esc => app.cancel_total_edit(),
            _ => {
                edit_input(&mut app.total_input, key);
            }
        }
        return Ok(());
    }

    if app.budget_form.is_open() {
        forms::budget::handle_key(app, key);
        return Ok(());
    }

    if app.interaction.item_form.is_open() {
        forms::item::handle_key(app, key);
        return Ok(());
    }

    handle_normal_key(app, key)
}

/// Line editing shared by the inline editors
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focused_panel = FocusedPanel::Sidebar;
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Main;
            return Ok(());
        }
        KeyCode::Char('n') => {
            app.open_budget_form();
            return Ok(());
        }
        KeyCode::Char('a') => {
            app.open_item_form();
            return Ok(());
        }
        KeyCode::Char('t') => {
            app.open_total_editor();
            return Ok(());
        }
        KeyCode::Esc => {
            app.clear_status();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_items_key(app, key),
    }

    Ok(())
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => {
            app.select_budget(app.selected_budget_index);
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
}

fn handle_items_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => {
            let Some(item_id) = app.selected_item().map(|item| item.id) else {
                return;
            };
            match key.code {
                KeyCode::Char('e') | KeyCode::Enter => app.begin_amount_edit(item_id),
                KeyCode::Char('s') => app.toggle_skipped(item_id),
                KeyCode::Char('p') => app.mark_paid(item_id),
                _ => {}
            }
        }
    }
}
