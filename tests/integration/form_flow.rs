//! Integration tests for the TUI form driving the task store.
//!
//! Exercises the form contract end to end through key events: empty
//! descriptions are rejected with a warning before the store is
//! called, remove/complete require a row selection, and the pending
//! view maps visible rows back to store indices for every mutation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtask::app::{App, PanelFocus, ViewMode};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates a key press without modifiers.
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Types each character of `text` into the app.
fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

/// Types a description and submits it with Enter.
fn add_task(app: &mut App, description: &str) {
    type_str(app, description);
    app.handle_key_event(key(KeyCode::Enter));
}

/// Collects the descriptions currently in the store, in order.
fn descriptions(app: &App) -> Vec<String> {
    app.store
        .list_all()
        .iter()
        .map(|task| task.description().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Add flow
// ---------------------------------------------------------------------------

#[test]
fn typed_description_lands_in_the_store() {
    let mut app = App::new();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Study");

    assert_eq!(descriptions(&app), ["Buy milk", "Study"]);
    assert!(app.input.is_empty());
}

#[test]
fn empty_submission_warns_and_leaves_store_untouched() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.store.is_empty());
    assert_eq!(
        app.status_message.as_deref(),
        Some("Task description cannot be empty")
    );
}

#[test]
fn successful_add_clears_a_previous_warning() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.status_message.is_some());

    add_task(&mut app, "Recovered");
    assert!(app.status_message.is_none());
    assert_eq!(app.store.len(), 1);
}

// ---------------------------------------------------------------------------
// Selection requirements
// ---------------------------------------------------------------------------

#[test]
fn remove_without_visible_rows_warns() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('d')));

    assert_eq!(app.status_message.as_deref(), Some("No task selected"));
}

#[test]
fn complete_without_visible_rows_warns() {
    let mut app = App::new();
    add_task(&mut app, "Done already");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('c')));

    // Switch to the pending view: the only task is completed, so the
    // table is empty and a second complete has nothing to act on.
    app.handle_key_event(key(KeyCode::Char('p')));
    app.handle_key_event(key(KeyCode::Char('c')));

    assert_eq!(app.status_message.as_deref(), Some("No task selected"));
    assert_eq!(app.store.len(), 1);
}

// ---------------------------------------------------------------------------
// Complete / remove through the table
// ---------------------------------------------------------------------------

#[test]
fn complete_marks_only_the_selected_task() {
    let mut app = App::new();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Study");

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.store.list_all()[0].is_completed());
    assert!(app.store.list_all()[1].is_completed());
    assert_eq!(app.store.list_pending().len(), 1);
}

#[test]
fn remove_deletes_the_selected_task() {
    let mut app = App::new();
    add_task(&mut app, "Review code");
    add_task(&mut app, "Backup");

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('d')));

    assert_eq!(descriptions(&app), ["Backup"]);
}

#[test]
fn selection_follows_the_shrinking_table() {
    let mut app = App::new();
    add_task(&mut app, "A");
    add_task(&mut app, "B");

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('d')));

    // The last row was removed; the selection clamps to the new last row.
    assert_eq!(app.selected, 0);
    app.handle_key_event(key(KeyCode::Char('d')));
    assert!(app.store.is_empty());
}

// ---------------------------------------------------------------------------
// Pending view
// ---------------------------------------------------------------------------

#[test]
fn pending_view_hides_completed_tasks() {
    let mut app = App::new();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Study");

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('c')));
    app.handle_key_event(key(KeyCode::Char('p')));

    assert_eq!(app.view, ViewMode::Pending);
    assert_eq!(app.visible_indices(), vec![0]);
}

#[test]
fn mutations_in_pending_view_target_the_right_store_task() {
    let mut app = App::new();
    add_task(&mut app, "A");
    add_task(&mut app, "B");
    add_task(&mut app, "C");

    app.handle_key_event(key(KeyCode::Tab));
    // Complete "B"; pending view now shows [A, C].
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('c')));
    app.handle_key_event(key(KeyCode::Char('p')));

    // Row 1 of the pending view is "C" — removing it must not touch "B".
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('d')));

    assert_eq!(descriptions(&app), ["A", "B"]);
    assert!(app.store.list_all()[1].is_completed());
}

#[test]
fn completing_the_last_pending_row_clamps_selection() {
    let mut app = App::new();
    add_task(&mut app, "A");
    add_task(&mut app, "B");

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('p')));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('c')));

    assert_eq!(app.selected, 0);
    assert_eq!(app.visible_indices(), vec![0]);
}

// ---------------------------------------------------------------------------
// Focus and quit
// ---------------------------------------------------------------------------

#[test]
fn tab_cycles_between_input_and_table() {
    let mut app = App::new();
    assert_eq!(app.focus, PanelFocus::Input);
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, PanelFocus::Table);
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, PanelFocus::Input);
}

#[test]
fn table_shortcuts_do_not_leak_into_the_input() {
    let mut app = App::new();
    type_str(&mut app, "dcp");

    // 'd', 'c', and 'p' are table shortcuts but plain text while the
    // input is focused.
    assert_eq!(app.input, "dcp");
    assert!(app.store.is_empty());
    assert_eq!(app.view, ViewMode::All);
}

#[test]
fn esc_and_ctrl_c_quit_from_either_focus() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit);

    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn pending_start_flag_is_honored() {
    let app = App::new().with_pending_view(true);
    assert_eq!(app.view, ViewMode::Pending);
}
