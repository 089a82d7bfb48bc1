//! Pages
//!
//! One component per route.

mod dashboard;
mod todo_list;

pub use dashboard::DashboardView;
pub use todo_list::TodoListView;
