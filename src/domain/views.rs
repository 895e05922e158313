use super::task::Task;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Size and head of the arrival queue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueSummary {
    pub size: usize,
    pub front: Option<Task>,
}

/// Checkbox glyph for a task row
pub fn status_badge(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// One-line rendering of a task: badge, title, type and priority
pub fn task_line(task: &Task) -> String {
    let priority = task.priority().map(|p| p.to_tag()).unwrap_or("-");
    let mut line = format!(
        "{} {} ({}, {})",
        status_badge(task.is_completed()),
        task.title(),
        task.type_tag(),
        priority
    );
    if let Some(deadline) = task.deadline() {
        line.push_str(&format!(" due {}", deadline.format("%Y-%m-%d %H:%M")));
    }
    if let Some(subtasks) = task.subtasks() {
        let done = subtasks.iter().filter(|s| s.completed).count();
        line.push_str(&format!(" [{}/{}]", done, subtasks.len()));
    }
    line
}

/// Render a timestamp as a local wall-clock label (e.g. "14:05:09")
pub fn time_label(at: &DateTime<Local>, format: &str) -> String {
    at.format(format).to_string()
}
