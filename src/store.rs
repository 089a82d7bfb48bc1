//! Global Todo Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{NewTodo, Todo};
use crate::seed;
use crate::todos;

/// Global todo state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos, newest first
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// State loaded from the bundled seed document, empty if it fails to parse
    pub fn seeded() -> Self {
        match seed::default_todos(Utc::now()) {
            Ok(todos) => {
                web_sys::console::log_1(&format!("[SEED] Loaded {} todos", todos.len()).into());
                Self::new(todos)
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[SEED] {}", e).into());
                Self::default()
            }
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Create the store and make it available to all children
pub fn provide_todo_store(state: TodoState) -> TodoStore {
    let store = Store::new(state);
    provide_context(store);
    store
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo at the top of the list
pub fn store_add_todo(store: &TodoStore, new_todo: NewTodo) -> i64 {
    let id = todos::add_todo(&mut store.todos().write(), new_todo, Utc::now());
    web_sys::console::log_1(&format!("[STORE] Added todo {}", id).into());
    id
}

/// Toggle completion of a todo by ID
pub fn store_toggle_todo(store: &TodoStore, id: i64) {
    if let Some(completed) = todos::toggle_todo(&mut store.todos().write(), id, Utc::now()) {
        web_sys::console::log_1(&format!("[STORE] Todo {} completed={}", id, completed).into());
    }
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: i64) {
    if todos::remove_todo(&mut store.todos().write(), id) {
        web_sys::console::log_1(&format!("[STORE] Removed todo {}", id).into());
    }
}

/// Remove all completed todos
pub fn store_clear_completed(store: &TodoStore) {
    let removed = todos::clear_completed(&mut store.todos().write());
    web_sys::console::log_1(&format!("[STORE] Cleared {} completed todos", removed).into());
}
