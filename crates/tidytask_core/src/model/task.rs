//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record and its list filter.
//! - Provide lifecycle helpers for completion transitions.
//!
//! # Invariants
//! - `id` is stable and never reused for another task in a session.
//! - `title` is non-empty after trimming and at most `TITLE_MAX_CHARS`.
//! - `description` is trimmed; an empty description is represented as `None`.
//! - `completed_at` is `Some` exactly when `completed` is `true`; the
//!   transition helpers below maintain this pairing.
//! - `created_at` is set once at creation and never mutated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Maximum title length in characters, matching the app's input cap.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters, matching the app's input cap.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Stable identifier for every task created in a session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// View selector over the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task, in store order.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Tasks already completed.
    Completed,
}

impl TaskFilter {
    /// Parses the external filter label (`all|active|completed`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns the stable external label for this filter.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Validation failure for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Title exceeds `TITLE_MAX_CHARS`.
    TitleTooLong { chars: usize },
    /// Description exceeds `DESCRIPTION_MAX_CHARS`.
    DescriptionTooLong { chars: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "task title is {chars} characters; maximum is {TITLE_MAX_CHARS}"
            ),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "task description is {chars} characters; maximum is {DESCRIPTION_MAX_CHARS}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical to-do record.
///
/// Serialized field names are camelCase to match the mobile app's external
/// schema (`createdAt`, `completedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable session-unique ID.
    pub id: TaskId,
    /// Short task text, trimmed, non-empty.
    pub title: String,
    /// Optional longer text, trimmed; `None` when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag; defaults to `false` at creation.
    pub completed: bool,
    /// Creation instant in Unix epoch milliseconds.
    pub created_at: i64,
    /// Completion instant in epoch milliseconds; paired with `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Task {
    /// Creates a new, not-yet-completed task with a generated stable ID.
    ///
    /// The caller is expected to pass trimmed input; `validate` enforces the
    /// text invariants before a task may enter the store.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            completed: false,
            created_at: now_epoch_ms(),
            completed_at: None,
        }
    }

    /// Checks the text invariants of this task.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is empty after trimming.
    /// - `TitleTooLong` / `DescriptionTooLong` on length cap violations.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let title_chars = self.title.chars().count();
        if title_chars > TITLE_MAX_CHARS {
            return Err(TaskValidationError::TitleTooLong { chars: title_chars });
        }
        if let Some(description) = &self.description {
            let chars = description.chars().count();
            if chars > DESCRIPTION_MAX_CHARS {
                return Err(TaskValidationError::DescriptionTooLong { chars });
            }
        }
        Ok(())
    }

    /// Marks this task completed at the given instant.
    pub fn mark_completed(&mut self, at_epoch_ms: i64) {
        self.completed = true;
        self.completed_at = Some(at_epoch_ms);
    }

    /// Reopens this task, clearing the completion instant.
    pub fn mark_active(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Returns whether this task is still to be done.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Returns whether this task is visible under `filter`.
    pub fn matches(&self, filter: TaskFilter) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !self.completed,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// Aggregate counts over the task list.
///
/// `active + completed == total` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Current wall-clock instant in Unix epoch milliseconds.
///
/// Clamps to 0 for clocks set before the epoch instead of panicking.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
