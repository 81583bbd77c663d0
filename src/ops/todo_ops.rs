use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::todo::{Filter, Todo, TodoId};

use super::filter::visible_todos;

/// Error type for todo operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("todo not found: {0}")]
    NotFound(TodoId),
    #[error("todo text cannot be empty")]
    EmptyText,
}

/// Source of per-store instance numbers
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// The ordered collection of todos and the operations that mutate it.
///
/// Failed operations never mutate: every `Err` leaves the store exactly as it
/// was, so callers may treat errors as no-ops.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    /// Every id ever handed out, so deleted ids are never reissued
    issued: HashSet<TodoId>,
    /// Bumped on every successful mutation
    revision: u64,
    /// Distinct for every store, clones included
    instance: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        TodoStore {
            todos: Vec::new(),
            issued: HashSet::new(),
            revision: 0,
            instance: next_instance(),
        }
    }
}

impl Clone for TodoStore {
    /// A clone diverges from its source, so it gets its own instance number
    fn clone(&self) -> Self {
        TodoStore {
            todos: self.todos.clone(),
            issued: self.issued.clone(),
            revision: self.revision,
            instance: next_instance(),
        }
    }
}

fn next_instance() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore::default()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new item. Returns the assigned id.
    pub fn add(&mut self, text: &str) -> Result<TodoId, TodoError> {
        if is_blank(text) {
            return Err(TodoError::EmptyText);
        }
        let id = self.fresh_id();
        self.todos.push(Todo::new(id.clone(), text));
        self.bump();
        Ok(id)
    }

    /// Flip the done flag. Returns the new value.
    pub fn toggle(&mut self, id: &TodoId) -> Result<bool, TodoError> {
        let todo = self.find_mut(id)?;
        todo.done = !todo.done;
        let done = todo.done;
        self.bump();
        Ok(done)
    }

    /// Remove an item. Unknown ids are a no-op and return `None`.
    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        let idx = self.position(id)?;
        let removed = self.todos.remove(idx);
        self.bump();
        Some(removed)
    }

    /// Set (not toggle) the editing flag
    pub fn set_editing(&mut self, id: &TodoId, editing: bool) -> Result<(), TodoError> {
        let todo = self.find_mut(id)?;
        if todo.editing != editing {
            todo.editing = editing;
            self.bump();
        }
        Ok(())
    }

    /// Replace an item's text, keeping its done and editing flags
    pub fn update_text(&mut self, id: &TodoId, text: &str) -> Result<(), TodoError> {
        if is_blank(text) {
            // Unknown id wins over empty text so callers can log it
            self.find_mut(id)?;
            return Err(TodoError::EmptyText);
        }
        let todo = self.find_mut(id)?;
        if todo.text != text {
            todo.text = text.to_string();
            self.bump();
        }
        Ok(())
    }

    /// Remove every done item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.done);
        let removed = before - self.todos.len();
        if removed > 0 {
            self.bump();
        }
        removed
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Items visible under `filter`, in insertion order
    pub fn visible(&self, filter: Filter) -> Vec<&Todo> {
        visible_todos(&self.todos, filter)
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| &t.id == id)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of items not yet done ("items left")
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.done).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.done).count()
    }

    /// Mutation counter; changes whenever the collection changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Identifies this store among all live stores. Together with
    /// `revision` it names one exact state of one collection.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn find_mut(&mut self, id: &TodoId) -> Result<&mut Todo, TodoError> {
        self.todos
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))
    }

    fn fresh_id(&mut self) -> TodoId {
        loop {
            let id = TodoId::random();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
