use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::text_input::TextInput;

/// What a key did to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TextEffect {
    /// Buffer contents changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// Not a text-editing key
    Ignored,
}

/// Shared single-line editing keys for the add and edit fields
pub(super) fn handle_text_key(input: &mut TextInput, key: KeyEvent) -> TextEffect {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let changed = |b: bool| if b { TextEffect::Changed } else { TextEffect::Moved };

    match key.code {
        KeyCode::Char('a') if ctrl => {
            input.move_home();
            TextEffect::Moved
        }
        KeyCode::Char('e') if ctrl => {
            input.move_end();
            TextEffect::Moved
        }
        KeyCode::Char('w') if ctrl => changed(input.delete_word_back()),
        KeyCode::Char('u') if ctrl => changed(input.delete_to_start()),
        KeyCode::Backspace if alt => changed(input.delete_word_back()),
        KeyCode::Char(_) if ctrl || alt => TextEffect::Ignored,
        KeyCode::Char(c) => {
            input.insert_char(c);
            TextEffect::Changed
        }
        KeyCode::Backspace => changed(input.backspace()),
        KeyCode::Delete => changed(input.delete()),
        KeyCode::Left => {
            input.move_left();
            TextEffect::Moved
        }
        KeyCode::Right => {
            input.move_right();
            TextEffect::Moved
        }
        KeyCode::Home => {
            input.move_home();
            TextEffect::Moved
        }
        KeyCode::End => {
            input.move_end();
            TextEffect::Moved
        }
        _ => TextEffect::Ignored,
    }
}

/// Map Shift+letter to the uppercase letter so bindings can match on `Char('G')`
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
