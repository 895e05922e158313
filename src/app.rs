use crate::config::DeckConfig;
use crate::domain::{TaskId, UndoKind};
use crate::store::TaskStore;

/// Pending input for adding a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFormState {
    pub title: String,
    pub task_type: String,
}

impl InputFormState {
    pub fn new(default_type: &str) -> Self {
        Self {
            title: String::new(),
            task_type: default_type.to_string(),
        }
    }
}

/// Session state: the store plus transient input
#[derive(Debug)]
pub struct AppState {
    pub store: TaskStore,
    pub input_form: InputFormState,
    pub config: DeckConfig,
}

impl AppState {
    pub fn new(store: TaskStore, config: DeckConfig) -> Self {
        let input_form = InputFormState::new(&config.default_type);
        Self {
            store,
            input_form,
            config,
        }
    }

    pub fn set_input_title(&mut self, title: &str) {
        self.input_form.title = title.to_string();
    }

    pub fn set_input_type(&mut self, task_type: &str) {
        self.input_form.task_type = task_type.to_string();
    }

    /// Submit the input form and reset it, whether or not a task was added
    pub fn submit_input_form(&mut self) -> Option<TaskId> {
        let form = std::mem::replace(
            &mut self.input_form,
            InputFormState::new(&self.config.default_type),
        );
        self.store.add_task(&form.title, &form.task_type)
    }

    /// Add a task directly, bypassing the form
    pub fn add_task(&mut self, title: &str, task_type: &str) -> Option<TaskId> {
        self.store.add_task(title, task_type)
    }

    /// Id of the task at a 1-based position in the list
    pub fn task_at(&self, position: usize) -> Option<TaskId> {
        position
            .checked_sub(1)
            .and_then(|idx| self.store.tasks().get(idx))
            .map(|t| t.id())
    }

    pub fn toggle_at(&mut self, position: usize) -> bool {
        match self.task_at(position) {
            Some(id) => {
                self.store.toggle_task(id);
                true
            }
            None => false,
        }
    }

    pub fn delete_at(&mut self, position: usize) -> bool {
        match self.task_at(position) {
            Some(id) => {
                self.store.delete_task(id);
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> Option<UndoKind> {
        self.store.undo()
    }
}
