use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::common::{TextEffect, handle_text_key};

/// Keys while an item is shown as an edit field.
///
/// Every change is written through to the store; Enter and Esc (the
/// terminal's stand-in for losing focus) leave edit mode.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_edit(),
        _ => {
            if handle_text_key(&mut app.edit_input, key) == TextEffect::Changed {
                app.save_edit();
            }
        }
    }
}
