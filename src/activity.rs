//! Process-wide, append-only activity history.
//!
//! There is one shared log per process, created on first access through
//! [`ActivityLog::shared`] and never torn down. Stores can also be handed a
//! private log, which keeps tests from observing each other's entries.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static SHARED_LOG: OnceLock<Arc<ActivityLog>> = OnceLock::new();

/// One recorded operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

/// Append-only record of store operations
#[derive(Debug, Default)]
pub struct ActivityLog {
    // Writers are serialized here; the sequence itself is never reordered.
    entries: Mutex<Vec<LogEntry>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the process-wide log, created on first call
    pub fn shared() -> Arc<ActivityLog> {
        Arc::clone(SHARED_LOG.get_or_init(|| {
            tracing::debug!("activity log initialised");
            Arc::new(ActivityLog::new())
        }))
    }

    /// Append `(now, message)`
    pub fn log(&self, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        };
        self.lock().push(entry);
    }

    /// Snapshot of every entry in append order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        // A panic mid-push cannot leave a half-written entry, so a poisoned
        // lock still guards a valid sequence.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_log_appends_in_order() {
        let log = ActivityLog::new();
        log.log("first");
        log.log("second");
        let messages: Vec<String> = log.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert!(log.entries()[0].timestamp <= log.entries()[1].timestamp);
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_appends() {
        let log = ActivityLog::new();
        log.log("one");
        let snapshot = log.entries();
        log.log("two");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = ActivityLog::shared();
        let b = ActivityLog::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_writers_are_serialized() {
        let log = Arc::new(ActivityLog::new());
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for i in 0..50 {
                        log.log(format!("worker {} entry {}", worker, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 200);
    }
}
