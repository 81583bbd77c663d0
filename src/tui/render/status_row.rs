use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const NAVIGATE_HINTS: &[(&str, &str)] = &[
    ("a", "add"),
    ("space", "toggle"),
    ("e", "edit"),
    ("d", "delete"),
    ("C", "clear done"),
    ("tab", "filter"),
    ("?", "help"),
    ("q", "quit"),
];

const ADD_HINTS: &[(&str, &str)] = &[("Enter", "add"), ("Esc", "back")];

const EDIT_HINTS: &[(&str, &str)] = &[("Enter/Esc", "done")];

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let (label, hints) = match app.mode {
        Mode::Navigate => (None, NAVIGATE_HINTS),
        Mode::Add => (Some("ADD"), ADD_HINTS),
        Mode::Edit => (Some("EDIT"), EDIT_HINTS),
    };

    let mut spans: Vec<Span> = Vec::new();
    if let Some(label) = label {
        spans.push(Span::styled(format!(" {}", label), key_style));
    }
    if app.show_key_hints {
        for (key, desc) in hints {
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn navigate_hints() {
        let app = new_app();
        assert!(render(&app).starts_with(" a add  space toggle  e edit"));
    }

    #[test]
    fn edit_mode_label_and_hint() {
        let mut app = new_app();
        app.mode = Mode::Edit;
        assert_eq!(render(&app), " EDIT Enter/Esc done");
    }

    #[test]
    fn hints_can_be_turned_off() {
        let mut app = new_app();
        app.show_key_hints = false;
        assert_eq!(render(&app), "");
        app.mode = Mode::Add;
        assert_eq!(render(&app), " ADD");
    }
}
