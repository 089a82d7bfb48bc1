//! Todo List Operations
//!
//! Pure functions over the todo list. The store helpers call into these so the
//! behavior can be tested without a browser.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{NewTodo, Todo, TodoFilter};

/// Prepend a new open todo and return its id.
///
/// Ids are creation timestamps in milliseconds; when two todos are added within
/// the same millisecond the id is bumped past the current maximum. If the
/// maximum is already `i64::MAX`, the closest free id below the timestamp is used.
pub fn add_todo(todos: &mut Vec<Todo>, new_todo: NewTodo, now: DateTime<Utc>) -> i64 {
    let stamp = now.timestamp_millis();
    let id = match todos.iter().map(|t| t.id).max() {
        Some(max_id) if max_id >= stamp => max_id
            .checked_add(1)
            .unwrap_or_else(|| free_id_at_or_below(todos, stamp)),
        _ => stamp,
    };
    todos.insert(0, Todo::new(id, new_todo.title));
    id
}

fn free_id_at_or_below(todos: &[Todo], from: i64) -> i64 {
    let taken: HashSet<i64> = todos.iter().map(|t| t.id).collect();
    // at most todos.len() + 1 candidates are inspected
    (i64::MIN..=from).rev().find(|id| !taken.contains(id)).unwrap_or(from)
}

/// Toggle a todo's completion. Returns the new state, or `None` for an unknown id.
pub fn toggle_todo(todos: &mut [Todo], id: i64, now: DateTime<Utc>) -> Option<bool> {
    let todo = todos.iter_mut().find(|t| t.id == id)?;
    todo.toggle(now);
    Some(todo.completed)
}

/// Remove a todo by id. Returns whether anything was removed.
pub fn remove_todo(todos: &mut Vec<Todo>, id: i64) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Drop every completed todo, returning how many were removed
pub fn clear_completed(todos: &mut Vec<Todo>) -> usize {
    let before = todos.len();
    todos.retain(|t| !t.completed);
    before - todos.len()
}

/// Todos visible under a filter, in list order
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Completed todos, most recently completed first
pub fn recently_completed(todos: &[Todo], limit: usize) -> Vec<Todo> {
    let mut done: Vec<Todo> = todos.iter().filter(|t| t.completed).cloned().collect();
    done.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    done.truncate(limit);
    done
}
