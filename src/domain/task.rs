use super::enums::Priority;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique task identifier (UUIDv7, so ids sort by creation time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A checklist entry inside a project task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    pub completed: bool,
}

/// Type-specific payload of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "fields", rename_all = "lowercase")]
pub enum TaskKind {
    Simple,
    Urgent {
        /// Creation time + 24h
        deadline: DateTime<Local>,
    },
    Project {
        subtasks: Vec<Subtask>,
    },
    /// Unrecognized type tag, kept verbatim
    Other(String),
}

impl TaskKind {
    /// The type tag this kind was created from
    pub fn tag(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Urgent { .. } => "urgent",
            Self::Project { .. } => "project",
            Self::Other(tag) => tag,
        }
    }
}

/// A task record.
///
/// Identity, type, priority and creation time are fixed at construction.
/// Only the completion flag and a project's subtasks change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
    priority: Option<Priority>,
    created_at: DateTime<Local>,
    #[serde(flatten)]
    kind: TaskKind,
}

impl Task {
    pub(crate) fn new(
        id: TaskId,
        title: String,
        completed: bool,
        priority: Option<Priority>,
        created_at: DateTime<Local>,
        kind: TaskKind,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            priority,
            created_at,
            kind,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// None for tasks built from an unrecognized type tag
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn type_tag(&self) -> &str {
        self.kind.tag()
    }

    /// Deadline of an urgent task
    pub fn deadline(&self) -> Option<DateTime<Local>> {
        match &self.kind {
            TaskKind::Urgent { deadline } => Some(*deadline),
            _ => None,
        }
    }

    /// Subtasks of a project task (None for other kinds)
    pub fn subtasks(&self) -> Option<&[Subtask]> {
        match &self.kind {
            TaskKind::Project { subtasks } => Some(subtasks),
            _ => None,
        }
    }

    /// Flip the completion flag and return the new state
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Append a subtask. Returns false if this is not a project task.
    pub fn add_subtask(&mut self, title: impl Into<String>) -> bool {
        match &mut self.kind {
            TaskKind::Project { subtasks } => {
                subtasks.push(Subtask {
                    title: title.into(),
                    completed: false,
                });
                true
            }
            _ => false,
        }
    }
}
