use tracing::info;

use crate::graphql::model::Todo;

/// Process-lifetime, read-only collection of todo records.
///
/// Seeded once at startup and never written afterwards, which is what makes
/// sharing it across concurrent requests safe without locks.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn from_records(todos: Vec<Todo>) -> TodoStore {
        TodoStore { todos }
    }

    /// The fixed records this build ships with.
    pub fn seeded() -> TodoStore {
        let store = TodoStore::from_records(vec![
            Todo {
                id: String::from("a"),
                text: String::from("A todo not to forget"),
                done: false,
            },
            Todo {
                id: String::from("b"),
                text: String::from("This is the most important"),
                done: false,
            },
            Todo {
                id: String::from("c"),
                text: String::from("Please do this or else"),
                done: false,
            },
        ]);
        info!("Todo store seeded with {} records", store.len());
        store
    }

    /// First record whose id matches exactly.
    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Records whose completion flag matches, in insertion order.
    pub fn with_done(&self, done: bool) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| todo.done == done)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
