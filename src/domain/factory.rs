use super::enums::Priority;
use super::task::{Task, TaskId, TaskKind};
use chrono::{Duration, Local};

/// How long an urgent task has before its deadline (86,400,000 ms)
pub const URGENT_DEADLINE_HOURS: i64 = 24;

/// Base fields every task template starts from
#[derive(Debug, Clone, Default)]
pub struct TaskFields {
    pub title: String,
    pub completed: bool,
}

impl TaskFields {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

/// Build a task from a type tag.
///
/// Known tags are `simple`, `urgent` and `project`. Any other tag still
/// yields a task with its base fields set, but with no priority.
pub fn create_task(type_tag: &str, fields: TaskFields) -> Task {
    let created_at = Local::now();

    let (priority, kind) = match type_tag {
        "simple" => (Some(Priority::Medium), TaskKind::Simple),
        "urgent" => (
            Some(Priority::High),
            TaskKind::Urgent {
                deadline: created_at + Duration::hours(URGENT_DEADLINE_HOURS),
            },
        ),
        "project" => (
            Some(Priority::Medium),
            TaskKind::Project {
                subtasks: Vec::new(),
            },
        ),
        other => (None, TaskKind::Other(other.to_string())),
    };

    Task::new(
        TaskId::generate(),
        fields.title,
        fields.completed,
        priority,
        created_at,
        kind,
    )
}
