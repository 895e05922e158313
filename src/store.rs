use crate::activity::{ActivityLog, LogEntry};
use crate::collections::{PriorityIndex, TaskQueue, UndoEntry, UndoStack};
use crate::domain::{create_task, QueueSummary, Task, TaskFields, TaskId, UndoKind};
use crate::observer::{StoreEvent, TaskObserver};
use std::sync::Arc;

/// Owns the canonical task list and mirrors every mutation into the undo
/// stack, the arrival queue and the activity log.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    undo_stack: UndoStack,
    queue: TaskQueue,
    log: Arc<ActivityLog>,
    observer: TaskObserver,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Store writing to the process-wide activity log
    pub fn new() -> Self {
        Self::with_log(ActivityLog::shared())
    }

    pub fn with_log(log: Arc<ActivityLog>) -> Self {
        Self {
            tasks: Vec::new(),
            undo_stack: UndoStack::new(),
            queue: TaskQueue::new(),
            log,
            observer: TaskObserver::new(),
        }
    }

    /// Register a callback fired after each applied mutation
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observer.subscribe(callback);
    }

    /// Add a task built from `type_tag`. Blank titles are ignored.
    pub fn add_task(&mut self, title: &str, type_tag: &str) -> Option<TaskId> {
        if title.trim().is_empty() {
            return None;
        }

        let task = create_task(type_tag, TaskFields::titled(title));
        let id = task.id();

        self.undo_stack.push(UndoEntry::Add(task.clone()));
        self.queue.enqueue(task.clone());
        self.tasks.push(task);

        self.log.log(format!("Task added: {} ({})", title, type_tag));
        tracing::debug!(%id, type_tag, "task added");
        self.observer.notify(&StoreEvent::Added(id));
        Some(id)
    }

    /// Flip a task's completion flag. Not recorded for undo.
    pub fn toggle_task(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            return;
        };

        let completed = task.toggle();
        let state = if completed { "completed" } else { "incomplete" };
        self.log.log(format!("Task toggled: {} ({})", task.title(), state));
        tracing::debug!(%id, completed, "task toggled");
        self.observer.notify(&StoreEvent::Toggled { id, completed });
    }

    /// Remove a task from the list. The arrival queue keeps its record.
    pub fn delete_task(&mut self, id: TaskId) {
        let Some(pos) = self.tasks.iter().position(|t| t.id() == id) else {
            return;
        };

        let task = self.tasks.remove(pos);
        self.log.log(format!("Task deleted: {}", task.title()));
        self.undo_stack.push(UndoEntry::Delete(task));
        tracing::debug!(%id, "task deleted");
        self.observer.notify(&StoreEvent::Deleted(id));
    }

    /// Revert the most recent add or delete.
    ///
    /// An undone delete puts the task back at the end of the list, not at
    /// its old position.
    pub fn undo(&mut self) -> Option<UndoKind> {
        let entry = self.undo_stack.pop().ok()?;
        let kind = entry.kind();

        match entry {
            UndoEntry::Add(task) => {
                self.tasks.retain(|t| t.id() != task.id());
            }
            UndoEntry::Delete(task) => {
                self.tasks.push(task);
            }
        }

        self.log.log("Undo done");
        tracing::debug!(kind = kind.to_tag(), "undo applied");
        self.observer.notify(&StoreEvent::Undone(kind));
        Some(kind)
    }

    /// Live tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Live tasks by ascending priority, ties in list order
    pub fn priority_tasks(&self) -> Vec<&Task> {
        PriorityIndex::build(&self.tasks).in_order()
    }

    pub fn queue_summary(&self) -> QueueSummary {
        QueueSummary {
            size: self.queue.len(),
            front: self.queue.front().ok().cloned(),
        }
    }

    /// Arrival ledger, for callers that need more than the summary
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    pub fn is_undo_available(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Snapshot of the activity log this store writes to
    pub fn activity_log(&self) -> Vec<LogEntry> {
        self.log.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn create_test_store() -> TaskStore {
        TaskStore::with_log(Arc::new(ActivityLog::new()))
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title().to_string()).collect()
    }

    fn messages(store: &TaskStore) -> Vec<String> {
        store.activity_log().into_iter().map(|e| e.message).collect()
    }

    fn id_set(store: &TaskStore) -> HashSet<TaskId> {
        store.tasks().iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_add_task() {
        let mut store = create_test_store();
        let id = store.add_task("Buy milk", "simple").unwrap();

        assert_eq!(store.tasks().len(), 1);
        let task = store.get(id).unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.priority(), Some(Priority::Medium));
        assert!(store.is_undo_available());
        assert_eq!(store.queue_summary().size, 1);
        assert_eq!(messages(&store), vec!["Task added: Buy milk (simple)"]);
    }

    #[test]
    fn test_add_blank_title_is_noop() {
        let mut store = create_test_store();
        assert_eq!(store.add_task("", "simple"), None);
        assert_eq!(store.add_task("   \t", "urgent"), None);

        assert!(store.tasks().is_empty());
        assert!(!store.is_undo_available());
        assert_eq!(store.queue_summary().size, 0);
        assert!(store.activity_log().is_empty());
    }

    #[test]
    fn test_toggle_task() {
        let mut store = create_test_store();
        let id = store.add_task("Write tests", "simple").unwrap();

        store.toggle_task(id);
        assert!(store.get(id).unwrap().is_completed());
        store.toggle_task(id);
        assert!(!store.get(id).unwrap().is_completed());

        // Toggles are not undoable
        assert_eq!(store.undo_depth(), 1);
        assert_eq!(
            messages(&store),
            vec![
                "Task added: Write tests (simple)",
                "Task toggled: Write tests (completed)",
                "Task toggled: Write tests (incomplete)",
            ]
        );
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = create_test_store();
        store.add_task("Real", "simple");
        let stranger = create_task("simple", TaskFields::titled("elsewhere")).id();
        let before = store.activity_log();

        store.toggle_task(stranger);

        assert_eq!(store.activity_log(), before);
        assert!(!store.tasks()[0].is_completed());
    }

    #[test]
    fn test_delete_task_keeps_queue_record() {
        let mut store = create_test_store();
        let id = store.add_task("Temp", "simple").unwrap();

        store.delete_task(id);

        assert!(store.tasks().is_empty());
        assert_eq!(store.undo_depth(), 2);
        let summary = store.queue_summary();
        assert_eq!(summary.size, 1);
        assert_eq!(summary.front.map(|t| t.id()), Some(id));
        assert_eq!(messages(&store).last().unwrap(), "Task deleted: Temp");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = create_test_store();
        store.add_task("Keep", "simple");
        let stranger = create_task("simple", TaskFields::titled("x")).id();

        store.delete_task(stranger);

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.undo_depth(), 1);
        assert_eq!(store.activity_log().len(), 1);
    }

    #[test]
    fn test_undo_add() {
        let mut store = create_test_store();
        store.add_task("First", "simple");
        let before = id_set(&store);
        store.add_task("Second", "urgent");

        assert_eq!(store.undo(), Some(UndoKind::Add));

        assert_eq!(id_set(&store), before);
        assert_eq!(store.queue_summary().size, 2);
        assert_eq!(messages(&store).last().unwrap(), "Undo done");
    }

    #[test]
    fn test_undo_delete_restores_at_end() {
        let mut store = create_test_store();
        let a = store.add_task("A", "simple").unwrap();
        store.add_task("B", "simple");
        let before = id_set(&store);

        store.delete_task(a);
        assert_eq!(store.undo(), Some(UndoKind::Delete));

        assert_eq!(id_set(&store), before);
        let order: Vec<&str> = store.tasks().iter().map(|t| t.title()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_undo_delete_restores_completion_at_delete_time() {
        let mut store = create_test_store();
        let id = store.add_task("Done thing", "simple").unwrap();
        store.toggle_task(id);
        store.delete_task(id);
        store.undo();
        assert!(store.get(id).unwrap().is_completed());
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let mut store = create_test_store();
        assert!(!store.is_undo_available());
        assert_eq!(store.undo(), None);
        assert!(store.activity_log().is_empty());
    }

    #[test]
    fn test_undo_multiple_actions() {
        let mut store = create_test_store();
        let a = store.add_task("A", "simple").unwrap();
        store.add_task("B", "simple");
        store.delete_task(a);

        assert_eq!(store.undo(), Some(UndoKind::Delete));
        assert_eq!(store.undo(), Some(UndoKind::Add));
        assert_eq!(store.undo(), Some(UndoKind::Add));
        assert!(store.tasks().is_empty());
        assert!(!store.is_undo_available());
        assert_eq!(store.undo(), None);
    }

    #[test]
    fn test_undo_add_after_delete_of_same_task() {
        let mut store = create_test_store();
        let id = store.add_task("Gone", "simple").unwrap();
        store.delete_task(id);
        store.delete_task(id);
        assert_eq!(store.undo_depth(), 2);

        // Pops the delete, restoring the task, then the add removes it again
        store.undo();
        assert!(store.get(id).is_some());
        store.undo();
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_milk_and_report_scenario() {
        let mut store = create_test_store();
        let milk = store.add_task("Buy milk", "simple").unwrap();
        assert_eq!(titles(&store.priority_tasks()), vec!["Buy milk"]);

        store.add_task("Submit report", "urgent");
        assert_eq!(
            titles(&store.priority_tasks()),
            vec!["Buy milk", "Submit report"]
        );
        assert_eq!(store.queue_summary().size, 2);

        store.delete_task(milk);
        assert_eq!(titles(&store.priority_tasks()), vec!["Submit report"]);
        assert_eq!(store.queue_summary().size, 2);

        store.undo();
        assert_eq!(
            titles(&store.priority_tasks()),
            vec!["Buy milk", "Submit report"]
        );
        assert_eq!(store.queue_summary().size, 2);
        assert_eq!(
            store.queue_summary().front.map(|t| t.title().to_string()),
            Some("Buy milk".to_string())
        );
    }

    #[test]
    fn test_priority_ties_follow_list_order() {
        let mut store = create_test_store();
        store.add_task("urgent one", "urgent");
        store.add_task("plain one", "simple");
        store.add_task("odd one", "errand");
        store.add_task("plain two", "project");

        assert_eq!(
            titles(&store.priority_tasks()),
            vec!["plain one", "odd one", "plain two", "urgent one"]
        );
    }

    #[test]
    fn test_observers_fire_for_applied_mutations_only() {
        let mut store = create_test_store();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let id = store.add_task("Watched", "simple").unwrap();
        store.add_task(" ", "simple");
        store.toggle_task(id);
        store.delete_task(id);
        store.delete_task(id);
        store.undo();
        store.undo();
        store.undo();

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Added(id),
                StoreEvent::Toggled {
                    id,
                    completed: true
                },
                StoreEvent::Deleted(id),
                StoreEvent::Undone(UndoKind::Delete),
                StoreEvent::Undone(UndoKind::Add),
            ]
        );
    }

    #[test]
    fn test_stores_can_share_a_log() {
        let log = Arc::new(ActivityLog::new());
        let mut first = TaskStore::with_log(Arc::clone(&log));
        let mut second = TaskStore::with_log(Arc::clone(&log));
        first.add_task("one", "simple");
        second.add_task("two", "simple");
        assert_eq!(log.len(), 2);
        assert_eq!(first.activity_log(), second.activity_log());
    }
}
