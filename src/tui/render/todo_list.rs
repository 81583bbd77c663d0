use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

use super::add_field::push_input_spans;

/// Width of `" [x] "`
const CHECKBOX_WIDTH: usize = 5;

/// Render the visible items under the current filter
pub fn render_todo_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;

    if app.store.is_empty() {
        frame.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);
        return;
    }

    app.clamp_cursor();
    let cursor = app.cursor;
    let filter = app.filter;
    let show_cursor = app.mode != Mode::Add;

    // Keep the cursor row on screen
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if height > 0 && cursor >= app.scroll_offset + height {
        app.scroll_offset = cursor + 1 - height;
    }
    let scroll = app.scroll_offset;

    let theme = &app.theme;
    let edit_input = &app.edit_input;
    let visible = app.projector.visible(&app.store, filter);

    if visible.is_empty() {
        let msg = match filter {
            Filter::Active => " Nothing left to do",
            Filter::Completed => " Nothing completed yet",
            Filter::All => "",
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, todo) in visible.iter().enumerate().skip(scroll).take(height) {
        let is_cursor = show_cursor && i == cursor;
        let row_bg = if todo.editing {
            theme.input_bg
        } else if is_cursor {
            theme.selection_bg
        } else {
            bg
        };
        let row_style = Style::default().bg(row_bg);

        let check = if todo.done { "[x]" } else { "[ ]" };
        let check_color = if todo.done { theme.check } else { theme.dim };
        let mut spans = vec![
            Span::styled(" ", row_style),
            Span::styled(check, Style::default().fg(check_color).bg(row_bg)),
            Span::styled(" ", row_style),
        ];

        if todo.editing {
            push_input_spans(
                &mut spans,
                edit_input,
                Style::default().fg(theme.text_bright).bg(row_bg),
                Style::default().fg(theme.highlight).bg(row_bg),
            );
        } else {
            let mut text_style = Style::default().fg(theme.todo_color(todo.done)).bg(row_bg);
            if todo.done {
                text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
            }
            if is_cursor && !todo.done {
                text_style = text_style.fg(theme.text_bright).add_modifier(Modifier::BOLD);
            }
            let text = truncate_to_width(&todo.text, width.saturating_sub(CHECKBOX_WIDTH));
            spans.push(Span::styled(text, text_style));
        }

        if row_bg != bg {
            super::pad_line(&mut spans, width, row_style);
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
