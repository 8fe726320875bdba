//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::interaction::Bounds;

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Layout regions for the TUI
pub struct AppLayout {
    /// Budgets and totals
    pub sidebar: Rect,
    /// Items of the active budget
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    pub header: Rect,
    pub budgets: Rect,
    /// "Add New Budget" button, or the form while it is open
    pub add_budget: Rect,
    pub totals: Rect,
}

impl SidebarLayout {
    pub fn new(area: Rect, add_budget_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Header
                Constraint::Min(3),                    // Budgets
                Constraint::Length(add_budget_height), // Add budget
                Constraint::Length(5),                 // Totals
            ])
            .split(area);

        Self {
            header: chunks[0],
            budgets: chunks[1],
            add_budget: chunks[2],
            totals: chunks[3],
        }
    }
}

/// Layout for the main panel
pub struct MainPanelLayout {
    /// Budget name and spend
    pub header: Rect,
    pub items: Rect,
    pub form: Rect,
}

impl MainPanelLayout {
    pub fn new(area: Rect, form_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // Header
                Constraint::Min(3),              // Items
                Constraint::Length(form_height), // Item form
            ])
            .split(area);

        Self {
            header: chunks[0],
            items: chunks[1],
            form: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
