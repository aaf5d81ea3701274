//! Owned in-memory todo collection.
//!
//! # Design
//! A struct wrapping a sequence and a counter, not a process-global. Ids come
//! from a monotonically increasing counter and are never reused after a
//! delete. The `Vec` keeps insertion order: update replaces fields in place,
//! delete uses order-preserving removal. Lookup is a linear scan, which is
//! fine at the scale this service targets.
//!
//! The store itself is synchronous and lock-free; the HTTP layer wraps it in
//! `Arc<RwLock<_>>` so every operation is one atomic read-modify-write.

use crate::types::{Todo, TodoInput};

/// Ordered collection of todos with a monotonic id counter.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    last_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All live records in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Assign the next id, append the record, and return it.
    pub fn create(&mut self, input: TodoInput) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            title: input.title,
            description: input.description,
            is_complete: input.is_complete,
        };
        self.todos.push(todo.clone());
        todo
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Replace title/description/is_complete in place. The id and list
    /// position are preserved. Returns the updated record, or `None` if no
    /// live record has this id.
    pub fn update(&mut self, id: u64, input: TodoInput) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.title = input.title;
        todo.description = input.description;
        todo.is_complete = input.is_complete;
        Some(todo.clone())
    }

    /// Remove the record with this id, shifting later records to close the
    /// gap. Returns the removed record, or `None` if absent.
    pub fn delete(&mut self, id: u64) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> TodoInput {
        TodoInput {
            title: title.to_string(),
            description: String::new(),
            is_complete: false,
        }
    }

    #[test]
    fn create_assigns_ids_from_one() {
        let mut store = TodoStore::new();
        assert_eq!(store.create(input("a")).id, 1);
        assert_eq!(store.create(input("b")).id, 2);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = TodoStore::new();
        let a = store.create(input("a"));
        let b = store.create(input("b"));
        store.delete(a.id).unwrap();
        let c = store.create(input("c"));
        assert!(c.id > b.id);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn ids_strictly_increase_across_interleaved_deletes() {
        let mut store = TodoStore::new();
        let mut seen = Vec::new();
        for i in 0..5 {
            let todo = store.create(input("x"));
            seen.push(todo.id);
            if i % 2 == 0 {
                store.delete(todo.id).unwrap();
            }
        }
        for pair in seen.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn get_finds_live_record() {
        let mut store = TodoStore::new();
        let created = store.create(input("find me"));
        assert_eq!(store.get(created.id), Some(&created));
        assert_eq!(store.get(999), None);
    }

    #[test]
    fn update_replaces_fields_and_keeps_position() {
        let mut store = TodoStore::new();
        store.create(input("first"));
        let second = store.create(input("second"));
        store.create(input("third"));

        let updated = store
            .update(
                second.id,
                TodoInput {
                    title: "renamed".to_string(),
                    description: "now with text".to_string(),
                    is_complete: true,
                },
            )
            .unwrap();

        assert_eq!(updated.id, second.id);
        assert_eq!(updated.title, "renamed");
        assert!(updated.is_complete);
        // still in the middle, not re-sorted
        assert_eq!(store.list()[1], updated);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let mut store = TodoStore::new();
        assert!(store.update(42, input("nope")).is_none());
    }

    #[test]
    fn delete_closes_the_gap_in_order() {
        let mut store = TodoStore::new();
        let a = store.create(input("a"));
        let b = store.create(input("b"));
        let c = store.create(input("c"));

        store.delete(b.id).unwrap();

        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert!(store.get(b.id).is_none());
    }

    #[test]
    fn delete_unknown_id_is_none() {
        let mut store = TodoStore::new();
        store.create(input("a"));
        assert!(store.delete(999).is_none());
        assert_eq!(store.list().len(), 1);
    }
}
