//! Task table rendering (description + status columns).

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task table for the current view mode.
///
/// Rows are rebuilt from the store on every draw, so the table always
/// reflects the current state of each task.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Table;
    let all = app.store.list_all();

    let rows: Vec<Row> = app
        .visible_indices()
        .into_iter()
        .enumerate()
        .map(|(row, store_index)| {
            let task = &all[store_index];

            let text_style = if task.is_completed() {
                theme::dimmed()
            } else {
                theme::normal()
            };
            let row_style = if row == app.selected {
                if is_focused {
                    theme::selected()
                } else {
                    theme::highlighted()
                }
            } else {
                text_style
            };

            Row::new(vec![
                Cell::from(task.description().to_string()),
                Cell::from(task.status_label()),
            ])
            .style(row_style)
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            app.view.label(),
            theme::panel_title(theme::TABLE_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let widths = [Constraint::Min(20), Constraint::Length(10)];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Description", "Status"]).style(theme::bold()))
        .block(block);

    frame.render_widget(table, area);
}
