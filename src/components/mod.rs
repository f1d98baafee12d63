//! UI Components
//!
//! Reusable Leptos components.

mod delete_button;
mod task_row;
mod task_list;
mod new_task_form;
mod variant_tab_bar;
mod local_todo;
mod synced_todo;

pub use delete_button::DeleteButton;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use new_task_form::NewTaskForm;
pub use variant_tab_bar::VariantTabBar;
pub use local_todo::LocalTodo;
pub use synced_todo::SyncedTodo;
