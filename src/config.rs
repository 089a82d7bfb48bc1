//! UI Configuration
//!
//! Compile-time settings for layout and seed data.

/// Row height of a todo in the virtual list, in pixels
pub const TODO_ROW_HEIGHT: f64 = 48.0;

/// Rows rendered beyond each edge of the viewport when none is configured
pub const DEFAULT_OVERSCAN: usize = 3;

/// How many completed todos the dashboard lists
pub const RECENT_COMPLETED_LIMIT: usize = 5;

/// Seed document shipped with the app
pub const DEFAULT_TODOS_JSON: &str = include_str!("../data/default_todos.json");
