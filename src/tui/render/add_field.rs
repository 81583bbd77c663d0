use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;

const PLACEHOLDER: &str = "Enter todo here";

/// Render the "new todo" field
pub fn render_add_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Add;
    let bg = if focused {
        app.theme.input_bg
    } else {
        app.theme.background
    };
    let prompt_style = Style::default()
        .fg(if focused {
            app.theme.highlight
        } else {
            app.theme.dim
        })
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(" + ", prompt_style)];

    if focused {
        push_input_spans(
            &mut spans,
            &app.add_input,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
        );
    } else if app.add_input.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            app.add_input.text().to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    super::pad_line(&mut spans, area.width as usize, Style::default().bg(bg));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Text before the cursor, a `▌` cursor, then the rest
pub(super) fn push_input_spans(
    spans: &mut Vec<Span<'_>>,
    input: &TextInput,
    text_style: Style,
    cursor_style: Style,
) {
    let (before, after) = input.split_at_cursor();
    spans.push(Span::styled(before.to_string(), text_style));
    spans.push(Span::styled("\u{258C}", cursor_style));
    spans.push(Span::styled(after.to_string(), text_style));
}
