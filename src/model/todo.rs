use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Number of hex digits kept from a freshly drawn UUID
const ID_LEN: usize = 8;

/// Opaque identifier of a todo item, e.g. `3f9c01ab`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Draw a new random id. Uniqueness against existing ids is the store's job.
    pub fn random() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        TodoId(simple[..ID_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    /// Assigned at creation, never changes
    pub id: TodoId,
    /// Item text (never empty after trimming)
    pub text: String,
    /// Completion flag
    pub done: bool,
    /// Whether the item is currently shown as an edit field
    #[serde(skip)]
    pub editing: bool,
}

impl Todo {
    /// Create a fresh, not-done, not-editing item
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Todo {
            id,
            text: text.into(),
            done: false,
            editing: false,
        }
    }
}

/// Which items the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in tab order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Tab label shown in the footer
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether `todo` belongs in this filter's view
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.done,
            Filter::Completed => todo.done,
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
