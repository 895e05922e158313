pub mod enums;
pub mod factory;
pub mod task;
pub mod views;

pub use enums::{rank_of, Priority, UndoKind};
pub use factory::{create_task, TaskFields, URGENT_DEADLINE_HOURS};
pub use task::{Subtask, Task, TaskId, TaskKind};
pub use views::{status_badge, task_line, time_label, QueueSummary};
