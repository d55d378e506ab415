//! Task store operations and session state.
//!
//! # Responsibility
//! - Provide create/toggle/delete/query/stats entry points for callers.
//! - Enforce model validation before any state change.
//!
//! # Invariants
//! - Write paths must call `Task::validate()` before mutating the list.
//! - List order is creation order, newest first; no operation re-sorts.
//! - `stats().active + stats().completed == stats().total` after every
//!   operation.
//! - Log lines carry ids and counts only, never task text.

use crate::model::task::{now_epoch_ms, Task, TaskFilter, TaskId, TaskStats, TaskValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Starter tasks shown on first launch, newest rendered last in this list.
const WELCOME_TASKS: [(&str, &str); 2] = [
    (
        "Welcome to your To-Do App!",
        "This is your first task. Tap the checkbox to mark it as complete.",
    ),
    (
        "Add a new task",
        "Tap the + button to add your own tasks.",
    ),
];

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected before any state change.
    Validation(TaskValidationError),
    /// No task with the given ID exists (anymore).
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory task list with an active view filter.
///
/// One instance holds one user session. The store is explicitly constructed
/// and passed to its consumer; it is not a process-global.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: TaskFilter,
}

impl TaskStore {
    /// Creates an empty store with the default `All` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task from raw user input.
    ///
    /// # Contract
    /// - Trims title and description; empty-after-trim description becomes
    ///   absent.
    /// - Rejects empty or over-length input with `StoreError::Validation`,
    ///   leaving the store unchanged.
    /// - The new task is prepended (newest first) and returned as a
    ///   snapshot.
    pub fn create(&mut self, title: &str, description: Option<&str>) -> StoreResult<Task> {
        let title = title.trim().to_string();
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let task = Task::new(title, description);
        task.validate()?;

        let snapshot = task.clone();
        self.tasks.insert(0, task);
        debug!(
            "event=task_created module=store status=ok task_id={} total={}",
            snapshot.id,
            self.tasks.len()
        );
        Ok(snapshot)
    }

    /// Flips completion state for the task with `id`.
    ///
    /// # Contract
    /// - Unknown ids fail with `StoreError::NotFound`.
    /// - Completing sets `completed_at` to now; reopening clears it.
    /// - List position and all other fields are unchanged.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if task.completed {
            task.mark_active();
        } else {
            task.mark_completed(now_epoch_ms());
        }
        debug!(
            "event=task_toggled module=store status=ok task_id={} completed={}",
            id, task.completed
        );
        Ok(())
    }

    /// Removes the task with `id` permanently.
    ///
    /// # Contract
    /// - Unknown ids fail with `StoreError::NotFound`.
    /// - Removal is irreversible; there is no tombstone state.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.tasks.remove(index);
        debug!(
            "event=task_deleted module=store status=ok task_id={} total={}",
            id,
            self.tasks.len()
        );
        Ok(())
    }

    /// Replaces the active view filter; takes effect on the next `query`.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        debug!(
            "event=filter_changed module=store status=ok filter={}",
            filter.label()
        );
    }

    /// Returns the active view filter.
    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns a read-only snapshot of the list under the active filter.
    ///
    /// Store order (newest first) is preserved across all filters.
    pub fn query(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.matches(self.filter))
            .cloned()
            .collect()
    }

    /// Looks up a single task by ID, regardless of the active filter.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns aggregate counts over the full list.
    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskStats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// Number of tasks in the full list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the full list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Seeds the first-launch starter tasks.
    ///
    /// # Contract
    /// - No-op on a non-empty store.
    /// - Seeded tasks are ordinary tasks: generated ids, same validation
    ///   and lifecycle as user input.
    /// - Returns the number of tasks seeded.
    pub fn seed_welcome_tasks(&mut self) -> usize {
        if !self.tasks.is_empty() {
            return 0;
        }

        let mut seeded = 0;
        // create() prepends, so seed in reverse to render the welcome card first.
        for &(title, description) in WELCOME_TASKS.iter().rev() {
            if self.create(title, Some(description)).is_ok() {
                seeded += 1;
            }
        }
        debug!("event=welcome_seeded module=store status=ok seeded={seeded}");
        seeded
    }
}
