//! Seed Data
//!
//! Parses the default todo document embedded at build time.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::DEFAULT_TODOS_JSON;
use crate::error::SeedError;
use crate::models::Todo;

#[derive(Deserialize)]
struct SeedDocument {
    todos: Vec<Todo>,
}

/// Parse a seed document and bring every todo in line with
/// `completed == completed_at.is_some()`.
pub fn parse_seed(json: &str, now: DateTime<Utc>) -> Result<Vec<Todo>, SeedError> {
    let doc: SeedDocument = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let mut todos = Vec::with_capacity(doc.todos.len());
    for mut todo in doc.todos {
        if !seen.insert(todo.id) {
            return Err(SeedError::DuplicateId { id: todo.id });
        }
        match (todo.completed, todo.completed_at) {
            (true, None) => todo.completed_at = Some(now),
            (false, Some(_)) => todo.completed_at = None,
            _ => {}
        }
        todos.push(todo);
    }
    Ok(todos)
}

/// The todos shipped with the app
pub fn default_todos(now: DateTime<Utc>) -> Result<Vec<Todo>, SeedError> {
    parse_seed(DEFAULT_TODOS_JSON, now)
}
