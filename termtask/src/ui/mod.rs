//! Terminal UI rendering.

pub mod input_panel;
pub mod status_bar;
pub mod task_table;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
///
/// Every panel derives its contents from the store on each call;
/// nothing about the task list is cached between frames.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Task table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    input_panel::render(frame, chunks[0], app);
    task_table::render(frame, chunks[1], app);
    status_bar::render(frame, chunks[2], app);
}
