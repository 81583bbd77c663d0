use crate::model::todo::{Filter, Todo};

use super::todo_ops::TodoStore;

/// Items of `todos` that match `filter`, in their original order
pub fn visible_todos(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

/// Memoized projection of a store through a filter.
///
/// Holds positions into the store's collection, valid only for the store
/// instance and revision they were computed at. Recomputes when the store,
/// its revision or the filter changes.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    key: Option<(u64, u64, Filter)>,
    positions: Vec<usize>,
    recomputes: usize,
}

impl Projector {
    pub fn new() -> Self {
        Projector::default()
    }

    /// Positions (into `store.todos()`) of the visible items
    pub fn positions(&mut self, store: &TodoStore, filter: Filter) -> &[usize] {
        let key = (store.instance(), store.revision(), filter);
        if self.key != Some(key) {
            self.positions = store
                .todos()
                .iter()
                .enumerate()
                .filter(|(_, t)| filter.matches(t))
                .map(|(i, _)| i)
                .collect();
            self.key = Some(key);
            self.recomputes += 1;
        }
        &self.positions
    }

    /// Visible items, resolved against the store
    pub fn visible<'a>(&mut self, store: &'a TodoStore, filter: Filter) -> Vec<&'a Todo> {
        let todos = store.todos();
        self.positions(store, filter)
            .iter()
            .filter_map(|&i| todos.get(i))
            .collect()
    }

    /// Number of visible items
    pub fn len(&mut self, store: &TodoStore, filter: Filter) -> usize {
        self.positions(store, filter).len()
    }

    /// How many times the projection has been rebuilt
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}
