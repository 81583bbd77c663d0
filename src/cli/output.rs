use serde::Serialize;

use crate::model::{Filter, Todo};
use crate::ops::TodoStore;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoListJson<'a> {
    pub items_left: usize,
    pub completed: usize,
    pub todos: Vec<&'a Todo>,
}

impl<'a> TodoListJson<'a> {
    pub fn from_store(store: &'a TodoStore, filter: Filter) -> Self {
        TodoListJson {
            items_left: store.active_count(),
            completed: store.completed_count(),
            todos: store.visible(filter),
        }
    }
}

/// Pretty JSON for the whole list
pub fn list_json(store: &TodoStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TodoListJson::from_store(store, Filter::All))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn list_json_shape() {
        let mut store = TodoStore::new();
        let milk = store.add("Buy milk").unwrap();
        let dog = store.add("Walk dog").unwrap();
        store.toggle(&milk).unwrap();

        let value: serde_json::Value = serde_json::from_str(&list_json(&store).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "items_left": 1,
                "completed": 1,
                "todos": [
                    { "id": milk.as_str(), "text": "Buy milk", "done": true },
                    { "id": dog.as_str(), "text": "Walk dog", "done": false },
                ]
            })
        );
    }

    #[test]
    fn filtered_json() {
        let mut store = TodoStore::new();
        store.add("A").unwrap();
        let b = store.add("B").unwrap();
        store.toggle(&b).unwrap();

        let list = TodoListJson::from_store(&store, Filter::Active);
        assert_eq!(list.todos.len(), 1);
        assert_eq!(list.todos[0].text, "A");
    }
}
