//! UI Components
//!
//! Leptos components of the todo page.

mod add_todo_form;
mod delete_button;
mod edit_button;
mod todo_list;
mod todo_row;

pub use add_todo_form::AddTodoForm;
pub use delete_button::DeleteButton;
pub use edit_button::EditButton;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
