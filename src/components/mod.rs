//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_bar;
mod nav;
mod new_todo_form;
mod stat_card;
mod todo_row;
mod todo_virtual_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use nav::Nav;
pub use new_todo_form::NewTodoForm;
pub use stat_card::StatCard;
pub use todo_row::TodoRow;
pub use todo_virtual_list::TodoVirtualList;
