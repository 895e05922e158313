use crate::domain::{TaskId, UndoKind};

/// A mutation the store has applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    Toggled { id: TaskId, completed: bool },
    Deleted(TaskId),
    Undone(UndoKind),
}

type Callback = Box<dyn FnMut(&StoreEvent)>;

/// Subscriber list notified after each store mutation
#[derive(Default)]
pub struct TaskObserver {
    observers: Vec<Callback>,
}

impl TaskObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observers.push(Box::new(callback));
    }

    /// Call every subscriber, in subscription order
    pub fn notify(&mut self, event: &StoreEvent) {
        for callback in &mut self.observers {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for TaskObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}
