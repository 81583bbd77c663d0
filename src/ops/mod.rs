pub mod filter;
pub mod todo_ops;

pub use filter::{Projector, visible_todos};
pub use todo_ops::{TodoError, TodoStore};
