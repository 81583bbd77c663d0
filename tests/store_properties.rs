//! Integration tests for the todo store and its filtered views.
//!
//! Each test drives `TodoStore` through the public API only and checks the
//! collection and the three projections.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use todos::model::{Filter, Todo, TodoId};
use todos::ops::{Projector, TodoError, TodoStore};

fn texts(todos: &[&Todo]) -> Vec<String> {
    todos.iter().map(|t| t.text.clone()).collect()
}

fn id_set(store: &TodoStore, filter: Filter) -> HashSet<TodoId> {
    store.visible(filter).iter().map(|t| t.id.clone()).collect()
}

/// Deterministic pseudo-random sequence for mixed-operation tests
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn non_empty_adds_determine_size_and_ids_are_distinct() {
    let inputs = ["Buy milk", "", "Walk dog", "   ", "Call mum", "\t", "Pay rent"];
    let mut store = TodoStore::new();
    let mut ids = Vec::new();
    for text in inputs {
        if let Ok(id) = store.add(text) {
            ids.push(id);
        }
    }

    let expected = inputs.iter().filter(|t| !t.trim().is_empty()).count();
    assert_eq!(store.len(), expected);
    let distinct: HashSet<&TodoId> = ids.iter().collect();
    assert_eq!(distinct.len(), expected);
}

#[test]
fn blank_add_never_changes_size() {
    let mut store = TodoStore::new();
    store.add("A").unwrap();
    for blank in ["", " ", "\n", " \t "] {
        assert_eq!(store.add(blank), Err(TodoError::EmptyText));
        assert_eq!(store.len(), 1);
    }
}

#[test]
fn double_toggle_restores_done() {
    let mut store = TodoStore::new();
    let id = store.add("A").unwrap();
    let before = store.get(&id).unwrap().done;
    store.toggle(&id).unwrap();
    store.toggle(&id).unwrap();
    assert_eq!(store.get(&id).unwrap().done, before);
}

#[test]
fn removed_id_is_inert() {
    let mut store = TodoStore::new();
    let a = store.add("A").unwrap();
    store.add("B").unwrap();
    store.remove(&a);

    let snapshot: Vec<Todo> = store.todos().to_vec();
    let _ = store.toggle(&a);
    let _ = store.set_editing(&a, true);
    let _ = store.update_text(&a, "zombie");
    store.remove(&a);
    assert_eq!(store.todos(), snapshot.as_slice());
}

#[test]
fn clear_completed_leaves_active_in_order() {
    let mut store = TodoStore::new();
    let ids: Vec<TodoId> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|t| store.add(t).unwrap())
        .collect();
    store.toggle(&ids[1]).unwrap();
    store.toggle(&ids[4]).unwrap();

    store.clear_completed();
    assert_eq!(texts(&store.visible(Filter::All)), vec!["A", "C", "D"]);
    assert!(store.iter().all(|t| !t.done));
}

#[test]
fn active_union_completed_is_all_under_random_operations() {
    let mut rng = Lcg(42);
    let mut store = TodoStore::new();
    let mut projector = Projector::new();

    for step in 0..500 {
        let ids: Vec<TodoId> = store.iter().map(|t| t.id.clone()).collect();
        let pick = |r: u64| ids.get(r as usize % ids.len().max(1)).cloned();
        match rng.next() % 6 {
            0 | 1 => {
                let _ = store.add(&format!("item {step}"));
            }
            2 => {
                if let Some(id) = pick(rng.next()) {
                    store.toggle(&id).unwrap();
                }
            }
            3 => {
                if let Some(id) = pick(rng.next()) {
                    store.remove(&id);
                }
            }
            4 => {
                if let Some(id) = pick(rng.next()) {
                    store.update_text(&id, &format!("edited {step}")).unwrap();
                }
            }
            _ => {
                if rng.next() % 4 == 0 {
                    store.clear_completed();
                }
            }
        }

        let active = id_set(&store, Filter::Active);
        let completed = id_set(&store, Filter::Completed);
        let all = id_set(&store, Filter::All);
        assert!(active.is_disjoint(&completed));
        assert_eq!(&active | &completed, all);
        assert_eq!(all.len(), store.len());

        // The memoized projection always agrees with the pure one
        for f in Filter::ALL {
            assert_eq!(projector.visible(&store, f), store.visible(f));
        }
    }
}

#[test]
fn filtering_never_reorders() {
    let mut store = TodoStore::new();
    let ids: Vec<TodoId> = (0..10).map(|i| store.add(&i.to_string()).unwrap()).collect();
    for id in ids.iter().step_by(3) {
        store.toggle(id).unwrap();
    }
    assert_eq!(texts(&store.visible(Filter::Completed)), vec!["0", "3", "6", "9"]);
    assert_eq!(
        texts(&store.visible(Filter::Active)),
        vec!["1", "2", "4", "5", "7", "8"]
    );
}

#[test]
fn scenario_buy_milk_walk_dog() {
    let mut store = TodoStore::new();
    let milk = store.add("Buy milk").unwrap();
    store.add("Walk dog").unwrap();

    let collection: Vec<(&str, bool)> = store.iter().map(|t| (t.text.as_str(), t.done)).collect();
    assert_eq!(collection, vec![("Buy milk", false), ("Walk dog", false)]);

    store.toggle(&milk).unwrap();
    assert_eq!(texts(&store.visible(Filter::Completed)), vec!["Buy milk"]);
    assert_eq!(texts(&store.visible(Filter::Active)), vec!["Walk dog"]);
}

#[test]
fn scenario_clear_with_nothing_done() {
    let mut store = TodoStore::new();
    store.add("A").unwrap();
    store.add("B").unwrap();
    store.clear_completed();
    assert_eq!(store.len(), 2);
}

#[test]
fn scenario_toggle_then_clear_empties() {
    let mut store = TodoStore::new();
    let a = store.add("A").unwrap();
    store.toggle(&a).unwrap();
    store.clear_completed();
    assert!(store.is_empty());
}
