use crate::domain::{Task, UndoKind};
use crate::error::StructureError;

/// A reversible operation, holding its own copy of the affected task
#[derive(Debug, Clone, PartialEq)]
pub enum UndoEntry {
    Add(Task),
    Delete(Task),
}

impl UndoEntry {
    pub fn kind(&self) -> UndoKind {
        match self {
            Self::Add(_) => UndoKind::Add,
            Self::Delete(_) => UndoKind::Delete,
        }
    }

    pub fn task(&self) -> &Task {
        match self {
            Self::Add(task) | Self::Delete(task) => task,
        }
    }
}

/// Last-in first-out record of undoable operations. Unbounded.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    items: Vec<UndoEntry>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: UndoEntry) {
        self.items.push(entry);
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Result<UndoEntry, StructureError> {
        self.items.pop().ok_or(StructureError::EmptyStack)
    }

    pub fn peek(&self) -> Result<&UndoEntry, StructureError> {
        self.items.last().ok_or(StructureError::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
