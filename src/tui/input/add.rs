use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::handle_text_key;

/// Keys while the "new todo" field has focus
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Field keeps focus so several items can be entered in a row
            app.add_from_input();
        }
        KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {
            handle_text_key(&mut app.add_input, key);
        }
    }
}
