//! In-memory task deck.
//!
//! [`TaskStore`] owns the task list and keeps three companions in step with
//! it: an undo stack of add/delete inverses, an arrival-order queue, and the
//! process-wide [`ActivityLog`]. Priority order is derived on demand through
//! a binary search tree over the live tasks.

pub mod activity;
pub mod app;
pub mod collections;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod observer;
pub mod store;

pub use activity::{ActivityLog, LogEntry};
pub use collections::{PriorityIndex, TaskQueue, UndoEntry, UndoStack};
pub use domain::{create_task, Priority, QueueSummary, Task, TaskFields, TaskId, TaskKind, UndoKind};
pub use error::{CommandError, ConfigError, StructureError};
pub use observer::{StoreEvent, TaskObserver};
pub use store::TaskStore;
