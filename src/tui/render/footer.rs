use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;
use crate::util::unicode::display_width;

const CLEAR_LABEL: &str = "Clear Completed ";

/// Render "N items left", the filter tabs and the clear action
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let current = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let left = items_left_label(app.store.active_count());
    let mut spans = vec![Span::styled(left, dim), Span::styled("  ", dim)];

    for filter in Filter::ALL {
        let style = if filter == app.filter { current } else { dim };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let clear_width = display_width(CLEAR_LABEL);
    if used + clear_width < width {
        let clear_style = if app.store.completed_count() > 0 {
            Style::default().fg(app.theme.text).bg(bg)
        } else {
            dim
        };
        spans.push(Span::styled(" ".repeat(width - used - clear_width), dim));
        spans.push(Span::styled(CLEAR_LABEL, clear_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn items_left_label(n: usize) -> String {
    let noun = if n == 1 { "item" } else { "items" };
    format!(" {} {} left", n, noun)
}
