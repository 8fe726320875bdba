//! TUI Views module
//!
//! The sidebar, the item panel and the status bar. Every frame starts with
//! an empty region registry that the views fill as they draw.

pub mod items;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::services::Summary;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    app.regions.clear();
    let layout = AppLayout::new(frame.area());
    let summary = Summary::from_store(&app.store);

    sidebar::render(frame, app, layout.sidebar, &summary);
    items::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
