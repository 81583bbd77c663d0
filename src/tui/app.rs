use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, Filter, Todo, TodoId};
use crate::ops::{Projector, TodoError, TodoStore};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list
    Navigate,
    /// Typing into the "new todo" field
    Add,
    /// Editing an existing item in place
    Edit,
}

/// Main application state.
///
/// The single owner of the store and the filter. Renderers and key handlers
/// borrow it; nothing else keeps item data between frames.
pub struct App {
    pub store: TodoStore,
    pub filter: Filter,
    pub projector: Projector,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// The "Enter todo here" field
    pub add_input: TextInput,
    /// Field shown in place of the item being edited
    pub edit_input: TextInput,
    /// Item currently in edit mode
    pub editing_id: Option<TodoId>,
    /// Text of the edited item when editing began
    pub edit_original: String,
    /// Help overlay visible
    pub show_help: bool,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TodoStore::new(),
            filter: Filter::All,
            projector: Projector::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            add_input: TextInput::new(),
            edit_input: TextInput::new(),
            editing_id: None,
            edit_original: String::new(),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
        }
    }

    // -----------------------------------------------------------------------
    // Projection
    // -----------------------------------------------------------------------

    /// Items shown under the current filter
    pub fn visible(&mut self) -> Vec<&Todo> {
        self.projector.visible(&self.store, self.filter)
    }

    pub fn visible_len(&mut self) -> usize {
        self.projector.len(&self.store, self.filter)
    }

    /// Id of the item under the cursor
    pub fn selected_id(&mut self) -> Option<TodoId> {
        let pos = *self
            .projector
            .positions(&self.store, self.filter)
            .get(self.cursor)?;
        self.store.todos().get(pos).map(|t| t.id.clone())
    }

    /// Keep the cursor inside the visible list
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    // -----------------------------------------------------------------------
    // Operations (every store error degrades to a no-op here)
    // -----------------------------------------------------------------------

    /// Add the add-field's text as a new item and clear the field
    pub fn add_from_input(&mut self) {
        match self.store.add(self.add_input.text()) {
            Ok(_) => self.add_input.clear(),
            Err(e) => self.report("add", e),
        }
    }

    pub fn toggle(&mut self, id: &TodoId) {
        if let Err(e) = self.store.toggle(id) {
            self.report("toggle", e);
        }
        self.clamp_cursor();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle(&id);
        }
    }

    pub fn remove(&mut self, id: &TodoId) {
        if self.store.remove(id).is_none() {
            self.report("remove", TodoError::NotFound(id.clone()));
        }
        self.clamp_cursor();
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.remove(&id);
        }
    }

    /// Switch an item into edit mode, seeding the edit field with its text
    pub fn begin_edit(&mut self, id: &TodoId) {
        let text = match self.store.get(id) {
            Some(todo) => todo.text.clone(),
            None => {
                self.report("edit", TodoError::NotFound(id.clone()));
                return;
            }
        };
        if let Err(e) = self.store.set_editing(id, true) {
            self.report("edit", e);
            return;
        }
        self.edit_input = TextInput::with_text(&text);
        self.edit_original = text;
        self.editing_id = Some(id.clone());
        self.mode = Mode::Edit;
    }

    pub fn begin_edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.begin_edit(&id);
        }
    }

    /// Push the edit field's text into the store (called on every change)
    pub fn save_edit(&mut self) {
        let Some(id) = self.editing_id.clone() else {
            return;
        };
        if let Err(e) = self.store.update_text(&id, self.edit_input.text()) {
            self.report("update", e);
        }
    }

    /// Leave edit mode. A field left blank puts back the text the edit started from.
    pub fn finish_edit(&mut self) {
        if let Some(id) = self.editing_id.take() {
            if self.edit_input.text().trim().is_empty()
                && let Err(e) = self.store.update_text(&id, &self.edit_original)
            {
                self.report("update", e);
            }
            if let Err(e) = self.store.set_editing(&id, false) {
                self.report("edit", e);
            }
        }
        self.edit_input.clear();
        self.edit_original.clear();
        self.mode = Mode::Navigate;
    }

    pub fn clear_completed(&mut self) {
        let removed = self.store.clear_completed();
        if removed > 0 {
            tracing::info!(removed, "cleared completed todos");
        }
        self.clamp_cursor();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Unknown ids are worth a warning; blank text is silently ignored
    fn report(&self, op: &str, err: TodoError) {
        match err {
            TodoError::EmptyText => {}
            TodoError::NotFound(_) => tracing::warn!(error = %err, "{} ignored", op),
        }
    }
}

/// Run the TUI application until the user quits
pub fn run(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(items = app.store.len(), "session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(
        items = app.store.len(),
        done = app.store.completed_count(),
        "session ended"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
