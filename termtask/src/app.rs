//! Application state and event handling for the TUI form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtask_core::TaskStore;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Description input box is focused (default).
    Input,
    /// Task table is focused.
    Table,
}

/// Which tasks the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Every task in the store.
    All,
    /// Only tasks that are not yet completed.
    Pending,
}

impl ViewMode {
    /// Returns the other view mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::All,
        }
    }

    /// Display label used as the table title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All tasks",
            Self::Pending => "Pending tasks",
        }
    }
}

/// Main application state for the TUI form.
///
/// All mutations go through the owned [`TaskStore`]. The table contents
/// are re-derived from the store on every draw via
/// [`visible_indices`](App::visible_indices), so the UI never caches
/// task state.
pub struct App {
    /// The task store driven by this form.
    pub store: TaskStore,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Which tasks the table shows.
    pub view: ViewMode,
    /// Selected row in the visible table.
    pub selected: usize,
    /// Transient warning shown in the status bar, cleared by the next
    /// successful action.
    pub status_message: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new application with an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: TaskStore::new(),
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            view: ViewMode::All,
            selected: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Starts the table in the pending-only view when `pending` is set.
    #[must_use]
    pub fn with_pending_view(mut self, pending: bool) -> Self {
        if pending {
            self.view = ViewMode::Pending;
        }
        self
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Table => self.handle_table_key(key),
        }
    }

    /// Store indices of the rows the table currently shows, in display
    /// order. Row `n` of the table is
    /// `store.list_all()[visible_indices()[n]]`.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        match self.view {
            ViewMode::All => (0..self.store.len()).collect(),
            ViewMode::Pending => self
                .store
                .list_all()
                .iter()
                .enumerate()
                .filter(|(_, task)| !task.is_completed())
                .map(|(index, _)| index)
                .collect(),
        }
    }

    /// Byte offset of the cursor into the input string.
    #[must_use]
    pub fn cursor_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(at, _)| at)
    }

    /// Handle key event when the input box is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the table is focused.
    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char('c' | ' ') => self.complete_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('p') => self.toggle_view(),
            _ => {}
        }
    }

    /// Toggle focus between the input box and the table.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Table,
            PanelFocus::Table => PanelFocus::Input,
        };
    }

    /// Submit the current input as a new task.
    ///
    /// The form rejects an empty description with a warning; the store
    /// itself would accept it.
    fn submit_task(&mut self) {
        if self.input.is_empty() {
            self.status_message = Some("Task description cannot be empty".to_string());
            return;
        }

        self.store.add(self.input.as_str());
        self.input.clear();
        self.cursor_position = 0;
        self.status_message = None;
    }

    /// Mark the selected task as completed.
    ///
    /// Warns and does nothing when the visible table has no selection.
    fn complete_selected(&mut self) {
        let Some(store_index) = self.selected_store_index() else {
            self.status_message = Some("No task selected".to_string());
            return;
        };

        self.store.complete_at(store_index);
        // In the pending view the completed row disappears.
        self.clamp_selection();
        self.status_message = None;
    }

    /// Remove the selected task from the store.
    ///
    /// Warns and does nothing when the visible table has no selection.
    fn remove_selected(&mut self) {
        let Some(store_index) = self.selected_store_index() else {
            self.status_message = Some("No task selected".to_string());
            return;
        };

        self.store.remove_at(store_index);
        self.clamp_selection();
        self.status_message = None;
    }

    /// Switch the table between the all-tasks and pending-only views.
    fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        self.clamp_selection();
    }

    /// Store index of the selected visible row, if any row is visible.
    fn selected_store_index(&self) -> Option<usize> {
        self.visible_indices().get(self.selected).copied()
    }

    /// Keep the selection inside the visible table after a mutation or
    /// view switch.
    fn clamp_selection(&mut self) {
        let visible = self.visible_indices().len();
        if self.selected >= visible {
            self.selected = visible.saturating_sub(1);
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let at = self.cursor_byte_index();
        self.input.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.cursor_byte_index();
            self.input.remove(at);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous table row.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next table row.
    fn select_next(&mut self) {
        if self.selected + 1 < self.visible_indices().len() {
            self.selected += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
