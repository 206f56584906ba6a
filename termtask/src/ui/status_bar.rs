//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
        PanelFocus::Table => {
            "Tab: switch panel | ↑↓/jk: navigate | c/Enter: complete | d: remove | p: pending view | Esc: quit"
        }
    };

    let total = app.store.len();
    let pending = app.store.list_pending().len();

    let mut spans = vec![
        Span::styled("TermTask v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::raw(format!("{total} tasks, {pending} pending")),
        Span::raw(" | "),
    ];

    // A warning takes the help text's slot until the next action clears it.
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(message.clone(), theme::warning()));
    } else {
        spans.push(Span::styled(help_text, theme::dimmed()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
