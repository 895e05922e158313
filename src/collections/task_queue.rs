use crate::domain::Task;
use crate::error::StructureError;
use std::collections::VecDeque;

/// First-in first-out ledger of tasks in arrival order.
///
/// Entries are snapshots taken at enqueue time; later completion or
/// deletion of the live task does not touch the queue.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    items: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, task: Task) {
        self.items.push_back(task);
    }

    /// Remove and return the earliest-arrived task
    pub fn dequeue(&mut self) -> Result<Task, StructureError> {
        self.items.pop_front().ok_or(StructureError::EmptyQueue)
    }

    pub fn front(&self) -> Result<&Task, StructureError> {
        self.items.front().ok_or(StructureError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }
}
