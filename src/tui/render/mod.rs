pub mod add_field;
pub mod footer;
pub mod help_overlay;
pub mod status_row;
pub mod todo_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: heading | add field | gap | list | footer | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading + blank
            Constraint::Length(1), // add field
            Constraint::Length(1), // gap
            Constraint::Min(1),    // list
            Constraint::Length(1), // footer
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_heading(frame, app, chunks[0]);
    add_field::render_add_field(frame, app, chunks[1]);
    todo_list::render_todo_list(frame, app, chunks[3]);

    // Footer only once there is something to count
    if !app.store.is_empty() {
        footer::render_footer(frame, app, chunks[4]);
    }

    status_row::render_status_row(frame, app, chunks[5]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let heading = Paragraph::new(Line::from(Span::styled(" TODO", style)))
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(heading, area);
}

/// Pad `spans` with background-colored spaces out to `width` cells
pub(super) fn pad_line(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let content: usize = spans
        .iter()
        .map(|s| crate::util::unicode::display_width(&s.content))
        .sum();
    if content < width {
        spans.push(Span::styled(" ".repeat(width - content), style));
    }
}
