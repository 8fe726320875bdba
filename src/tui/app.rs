//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Keyboard and mouse handlers both go through the operations defined here,
//! so a click and its key binding always do the same thing.

use crate::audit::ActivityLogger;
use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::interaction::{InteractionState, RegionKind, RegionRegistry};
use crate::models::{Amount, Budget, BudgetId, BudgetKey, Item, ItemId};
use crate::services::BudgetService;
use crate::store::BudgetStore;

use super::forms::{BudgetFormState, ItemField, ItemFormState};
use super::widgets::TextInput;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    pub store: BudgetStore,

    /// Activity log; `None` when disabled in settings
    pub logger: Option<ActivityLogger>,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub active_dialog: ActiveDialog,

    /// Budget whose items are shown in the main panel
    pub active_budget: Option<BudgetId>,

    /// Highlighted row in the sidebar
    pub selected_budget_index: usize,

    /// Highlighted row in the item list
    pub selected_item_index: usize,

    /// Open/closed state of the transient editors
    pub interaction: InteractionState,

    pub item_form: ItemFormState,

    pub budget_form: BudgetFormState,

    /// Editor for the item whose amount is being edited
    pub amount_input: TextInput,

    /// Editor for total earned
    pub total_input: TextInput,

    /// Regions drawn in the last frame
    pub regions: RegionRegistry,

    pub status_message: Option<String>,

    /// Set once the activity log fails; logging stays off for the session
    pub log_warning: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App; the first budget starts active
    pub fn new(settings: &'a Settings, store: BudgetStore, logger: Option<ActivityLogger>) -> Self {
        let active_budget = store.budgets().first().map(|b| b.id);

        Self {
            settings,
            store,
            logger,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            active_budget,
            selected_budget_index: 0,
            selected_item_index: 0,
            interaction: InteractionState::new(),
            item_form: ItemFormState::new(),
            budget_form: BudgetFormState::default(),
            amount_input: TextInput::new(),
            total_input: TextInput::new(),
            regions: RegionRegistry::new(),
            status_message: None,
            log_warning: None,
        }
    }

    /// Run one service operation against the store
    ///
    /// A failed log write keeps the operation's result and turns the
    /// activity log off.
    fn with_service<T, F>(&mut self, op: F) -> TrackerResult<T>
    where
        F: FnOnce(&mut BudgetService<'_>) -> TrackerResult<T>,
    {
        let mut service = BudgetService::new(&mut self.store).with_logger(self.logger.as_ref());
        let result = op(&mut service);
        let log_error = service.take_log_error();

        if let Some(err) = log_error {
            self.logger = None;
            self.log_warning = Some(format!("Activity log disabled: {}", err));
        }
        result
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Format money with the configured currency symbol
    pub fn format_amount(&self, amount: impl Into<Amount>) -> String {
        amount.into().format_with_symbol(&self.settings.currency_symbol)
    }

    pub fn active_budget(&self) -> Option<&Budget> {
        self.active_budget.and_then(|id| self.store.get(id))
    }

    pub fn active_key(&self) -> Option<BudgetKey> {
        self.active_budget.map(BudgetKey::Id)
    }

    /// Item under the cursor in the main panel
    pub fn selected_item(&self) -> Option<&Item> {
        self.active_budget()
            .and_then(|b| b.items.get(self.selected_item_index))
    }

    /// Make the budget at `index` active
    pub fn select_budget(&mut self, index: usize) {
        if let Some(budget) = self.store.budgets().get(index) {
            self.active_budget = Some(budget.id);
            self.selected_budget_index = index;
            self.selected_item_index = 0;
        }
    }

    pub fn select_budget_by_id(&mut self, id: BudgetId) {
        if let Some(index) = self.store.position(id) {
            self.select_budget(index);
        }
    }

    pub fn select_item_by_id(&mut self, id: ItemId) {
        if let Some(index) = self
            .active_budget()
            .and_then(|b| b.items.iter().position(|item| item.id == id))
        {
            self.selected_item_index = index;
        }
    }

    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.selected_budget_index = self.selected_budget_index.saturating_sub(1);
            }
            FocusedPanel::Main => {
                self.selected_item_index = self.selected_item_index.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_budget_index + 1 < self.store.len() {
                    self.selected_budget_index += 1;
                }
            }
            FocusedPanel::Main => {
                let count = self.active_budget().map_or(0, |b| b.items.len());
                if self.selected_item_index + 1 < count {
                    self.selected_item_index += 1;
                }
            }
        }
    }

    /// Key for the budget that holds `item_id`, preferring the active one
    fn key_for_item(&self, item_id: ItemId) -> Option<BudgetKey> {
        if self.active_budget().is_some_and(|b| b.contains_item(item_id)) {
            return self.active_key();
        }
        self.store
            .iter()
            .find(|b| b.contains_item(item_id))
            .map(|b| BudgetKey::Id(b.id))
    }

    fn report(&mut self, err: TrackerError) {
        self.set_status(form_message(&err));
    }

    // Budget form

    pub fn open_budget_form(&mut self) {
        self.budget_form.open();
        self.focused_panel = FocusedPanel::Sidebar;
    }

    pub fn submit_budget_form(&mut self) {
        let draft = self.budget_form.draft();
        let result = self.with_service(|s| s.add_budget(&draft));
        match result {
            Ok(id) => {
                self.budget_form.close();
                self.select_budget_by_id(id);
                self.set_status(format!("Budget '{}' created", draft.name));
            }
            Err(err) => self.budget_form.set_error(form_message(&err)),
        }
    }

    // Item form

    pub fn open_item_form(&mut self) {
        if !self.interaction.item_form.is_open() {
            self.item_form.set_focus(ItemField::Name);
        }
        self.interaction.item_form.open();
        self.focused_panel = FocusedPanel::Main;
    }

    /// Collapse the form; the typed draft is kept
    pub fn close_item_form(&mut self) {
        self.interaction.item_form.close();
        self.item_form.clear_error();
    }

    pub fn submit_item_form(&mut self) {
        let Some(key) = self.active_key() else {
            self.item_form.set_error("No budget selected");
            return;
        };

        let draft = self.item_form.draft();
        let result = self.with_service(|s| s.add_item(&key, &draft));
        match result {
            Ok(item) => {
                self.item_form.reset();
                self.interaction.item_form.close();
                self.select_item_by_id(item.id);
                self.set_status(format!("Added '{}'", item.name));
            }
            Err(err) => self.item_form.set_error(form_message(&err)),
        }
    }

    // Amount editor

    /// Open the amount editor on `item_id`, committing any other open edit
    pub fn begin_amount_edit(&mut self, item_id: ItemId) {
        if self.interaction.is_editing(item_id) {
            return;
        }
        if let Some(previous) = self.interaction.begin_amount_edit(item_id) {
            self.commit_amount(previous);
        }

        let text = self
            .key_for_item(item_id)
            .and_then(|key| self.store.find_item(&key, item_id))
            .map(|(_, item)| item.amount.edit_text())
            .unwrap_or_default();
        self.amount_input.set_content(text);
        self.amount_input.focused = true;
    }

    /// Close the amount editor and apply what was typed
    pub fn finish_amount_edit(&mut self) {
        if let Some(item_id) = self.interaction.end_amount_edit() {
            self.commit_amount(item_id);
        }
    }

    /// Close the amount editor without changing the amount
    pub fn cancel_amount_edit(&mut self) {
        self.interaction.end_amount_edit();
        self.amount_input.clear();
    }

    fn commit_amount(&mut self, item_id: ItemId) {
        let text = self.amount_input.value().to_string();
        self.amount_input.clear();

        let Some(key) = self.key_for_item(item_id) else {
            return;
        };
        let result = self.with_service(|s| s.update_item_amount(&key, item_id, &text));
        if let Err(err) = result {
            self.report(err);
        }
    }

    // Total earned editor

    pub fn open_total_editor(&mut self) {
        if self.interaction.total_earned.is_open() {
            return;
        }
        self.interaction.total_earned.open();
        let text = Amount::from(self.store.total_earned()).edit_text();
        self.total_input.set_content(text);
        self.total_input.focused = true;
    }

    /// Close the total editor and apply what was typed
    pub fn finish_total_edit(&mut self) {
        self.interaction.total_earned.close();
        self.apply_total_earned();
    }

    pub fn cancel_total_edit(&mut self) {
        self.interaction.total_earned.close();
        self.total_input.clear();
    }

    fn apply_total_earned(&mut self) {
        let text = self.total_input.value().to_string();
        self.total_input.clear();
        let result = self.with_service(|s| s.set_total_earned(&text));
        if let Err(err) = result {
            self.report(err);
        }
    }

    // Item actions

    pub fn toggle_skipped(&mut self, item_id: ItemId) {
        let Some(key) = self.key_for_item(item_id) else {
            return;
        };
        let result = self.with_service(|s| s.toggle_item_skipped(&key, item_id));
        match result {
            Ok(item) if item.is_skipped => self.set_status(format!("Skipped '{}'", item.name)),
            Ok(item) => self.set_status(format!("'{}' no longer skipped", item.name)),
            Err(err) => self.report(err),
        }
    }

    /// Mark paid; ignored for items that are already paid
    pub fn mark_paid(&mut self, item_id: ItemId) {
        let Some(key) = self.key_for_item(item_id) else {
            return;
        };
        if self
            .store
            .find_item(&key, item_id)
            .is_some_and(|(_, item)| item.is_paid)
        {
            return;
        }
        let result = self.with_service(|s| s.mark_item_as_paid(&key, item_id));
        match result {
            Ok(item) => self.set_status(format!("Paid '{}'", item.name)),
            Err(err) => self.report(err),
        }
    }

    // Pointer

    /// Handle a left-button press at a terminal cell
    ///
    /// Outside-interaction dismissal runs first against every open editor,
    /// then the region under the pointer is activated.
    pub fn on_pointer_down(&mut self, column: u16, row: u16) {
        if self.has_dialog() {
            self.close_dialog();
            return;
        }

        let dismissed = self.interaction.on_pointer_down(&self.regions, column, row);
        if let Some(item_id) = dismissed.amount_edit {
            self.commit_amount(item_id);
        }
        if dismissed.total_earned {
            self.apply_total_earned();
        }
        if dismissed.item_form {
            self.item_form.clear_error();
        }

        let Some(target) = self.regions.hit(column, row) else {
            return;
        };
        match target {
            RegionKind::Budget(id) => {
                self.select_budget_by_id(id);
                self.focused_panel = FocusedPanel::Sidebar;
            }
            RegionKind::AddBudget => self.open_budget_form(),
            RegionKind::BudgetForm => self.focused_panel = FocusedPanel::Sidebar,
            RegionKind::ItemForm => self.open_item_form(),
            RegionKind::TotalEarned => self.open_total_editor(),
            RegionKind::Amount(id) => {
                self.select_item_by_id(id);
                self.begin_amount_edit(id);
            }
            RegionKind::Item(id) => {
                self.select_item_by_id(id);
                self.focused_panel = FocusedPanel::Main;
            }
            RegionKind::SkipToggle(id) => self.toggle_skipped(id),
            RegionKind::MarkPaid(id) => self.mark_paid(id),
        }
    }
}

/// Message shown to the user for a failed operation
fn form_message(err: &TrackerError) -> String {
    match err {
        TrackerError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Bounds;
    use crate::models::{ItemDraft, Money};

    fn app(settings: &Settings) -> App<'_> {
        App::new(settings, BudgetStore::default(), None)
    }

    fn add_rent(app: &mut App) -> ItemId {
        app.item_form.name_input.set_content("Rent");
        app.item_form.amount_input.set_content("1200");
        app.submit_item_form();
        app.active_budget().unwrap().items[0].id
    }

    #[test]
    fn test_first_budget_is_active() {
        let settings = Settings::default();
        let app = app(&settings);
        assert_eq!(app.active_budget().unwrap().name, "Monthly Bills");
    }

    #[test]
    fn test_submit_item_form() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_item_form();
        let id = add_rent(&mut app);

        assert!(!app.interaction.item_form.is_open());
        assert_eq!(app.item_form.draft(), ItemDraft::default());
        assert_eq!(app.selected_item().unwrap().id, id);
    }

    #[test]
    fn test_unwritable_log_keeps_the_added_item() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let settings = Settings::default();
        let logger = ActivityLogger::new(temp_dir.path().to_path_buf());
        let mut app = App::new(&settings, BudgetStore::default(), Some(logger));

        app.open_item_form();
        add_rent(&mut app);

        assert_eq!(app.active_budget().unwrap().items.len(), 1);
        assert!(!app.interaction.item_form.is_open());
        assert!(app.item_form.error_message.is_none());
        assert!(app.logger.is_none());
        assert!(app.log_warning.is_some());

        app.open_item_form();
        add_rent(&mut app);
        assert_eq!(app.active_budget().unwrap().items.len(), 2);
    }

    #[test]
    fn test_invalid_item_form_shows_error() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_item_form();
        app.item_form.name_input.set_content("Rent");
        app.submit_item_form();

        assert_eq!(
            app.item_form.error_message.as_deref(),
            Some("Item amount is required")
        );
        assert!(app.interaction.item_form.is_open());
        assert!(app.active_budget().unwrap().items.is_empty());
    }

    #[test]
    fn test_submit_budget_form() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_budget_form();
        app.budget_form.name_input.set_content("Travel");
        app.submit_budget_form();

        assert!(!app.budget_form.is_open());
        assert_eq!(app.store.len(), 4);
        assert_eq!(app.active_budget().unwrap().name, "Travel");
        assert_eq!(app.selected_budget_index, 3);
    }

    #[test]
    fn test_empty_budget_name_keeps_form_open() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_budget_form();
        app.submit_budget_form();

        assert!(app.budget_form.is_open());
        assert!(app.budget_form.error_message.is_some());
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_amount_edit_commit_and_cancel() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let id = add_rent(&mut app);

        app.begin_amount_edit(id);
        assert_eq!(app.amount_input.value(), "1200.00");
        app.amount_input.set_content("1500");
        app.finish_amount_edit();
        assert_eq!(app.selected_item().unwrap().amount.to_string(), "$1500.00");

        app.begin_amount_edit(id);
        app.amount_input.set_content("9");
        app.cancel_amount_edit();
        assert_eq!(app.selected_item().unwrap().amount.to_string(), "$1500.00");
        assert_eq!(app.interaction.editing_item(), None);
    }

    #[test]
    fn test_switching_amount_edit_commits_previous() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let rent = add_rent(&mut app);
        app.item_form.name_input.set_content("Power");
        app.item_form.amount_input.set_content("80");
        app.submit_item_form();
        let power = app.active_budget().unwrap().items[1].id;

        app.begin_amount_edit(rent);
        app.amount_input.set_content("1300");
        app.begin_amount_edit(power);

        assert_eq!(app.interaction.editing_item(), Some(power));
        assert_eq!(app.amount_input.value(), "80.00");
        let items = &app.active_budget().unwrap().items;
        assert_eq!(items[0].amount.to_string(), "$1300.00");
    }

    #[test]
    fn test_total_editor() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.open_total_editor();
        assert_eq!(app.total_input.value(), "10000.00");
        app.total_input.set_content("not a number");
        app.finish_total_edit();

        assert!(!app.interaction.total_earned.is_open());
        assert_eq!(app.store.total_earned(), Money::zero());
    }

    #[test]
    fn test_mark_paid_is_disabled_once_paid() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let id = add_rent(&mut app);

        app.mark_paid(id);
        let first = app.selected_item().unwrap().last_paid_date;
        app.mark_paid(id);
        assert_eq!(app.selected_item().unwrap().last_paid_date, first);

        app.toggle_skipped(id);
        let item = app.selected_item().unwrap();
        assert!(item.is_skipped && !item.is_paid);
    }

    #[test]
    fn test_pointer_down_outside_commits_amount_edit() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let id = add_rent(&mut app);
        app.regions
            .register(RegionKind::Amount(id), Bounds::new(40, 4, 10, 1));

        app.on_pointer_down(42, 4);
        assert!(app.interaction.is_editing(id));
        app.amount_input.set_content("999");

        app.on_pointer_down(0, 30);
        assert_eq!(app.interaction.editing_item(), None);
        assert_eq!(app.selected_item().unwrap().amount.to_string(), "$999.00");
    }

    #[test]
    fn test_pointer_down_on_budget_selects_it() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let savings = app.store.budgets()[2].id;
        app.regions
            .register(RegionKind::Budget(savings), Bounds::new(0, 5, 30, 1));
        app.open_total_editor();

        app.on_pointer_down(3, 5);
        assert_eq!(app.active_budget, Some(savings));
        assert!(!app.interaction.total_earned.is_open());
        assert_eq!(app.store.total_earned(), Money::from_units(10_000));
    }
}
