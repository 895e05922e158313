pub mod priority_index;
pub mod task_queue;
pub mod undo_stack;

pub use priority_index::PriorityIndex;
pub use task_queue::TaskQueue;
pub use undo_stack::{UndoEntry, UndoStack};
