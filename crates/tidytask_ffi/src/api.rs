//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single in-memory task session for the app process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All failures surface as `ok=false` envelopes with readable messages.
//! - Session state is transient; nothing survives the process.

use std::sync::{Mutex, OnceLock};

use tidytask_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Task, TaskFilter, TaskId, TaskStore,
};
use uuid::Uuid;

static SESSION_STORE: OnceLock<Mutex<TaskStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row returned to the shell's list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTaskItem {
    /// Stable task ID in string form.
    pub task_id: String,
    /// Short task text.
    pub title: String,
    /// Optional longer text; absent when the user left it empty.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Creation instant in epoch milliseconds.
    pub created_at_ms: i64,
    /// Completion instant in epoch milliseconds; set while completed.
    pub completed_at_ms: Option<i64>,
}

/// Generic action response envelope for task command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created or affected task ID, when one exists.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, task_id: String) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            message: message.into(),
        }
    }

    fn done(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            task_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// List response envelope for the shell's task screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListResponse {
    /// Tasks visible under the active filter, store order preserved.
    pub items: Vec<EntryTaskItem>,
    /// Active filter label (`all|active|completed`).
    pub filter: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Aggregate counts envelope for badges and summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStatsResponse {
    pub total: u64,
    pub active: u64,
    pub completed: u64,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Seed response envelope for first-launch setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySeedResponse {
    /// Whether the seed call itself succeeded (a no-op seed is a success).
    pub ok: bool,
    /// Number of starter tasks created.
    pub seeded: u64,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Creates a task from the add-task screen.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Never panics.
/// - Returns operation result and created task ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_create_task(title: String, description: Option<String>) -> EntryActionResponse {
    match with_store(|store| store.create(title.as_str(), description.as_deref())) {
        Ok(Ok(task)) => EntryActionResponse::success("Task created.", task.id.to_string()),
        Ok(Err(err)) => EntryActionResponse::failure(format!("entry_create_task failed: {err}")),
        Err(err) => EntryActionResponse::failure(format!("entry_create_task failed: {err}")),
    }
}

/// Toggles completion state for one task.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Never panics; malformed or unknown ids return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_toggle_task(id: String) -> EntryActionResponse {
    let task_id = match parse_task_id(&id) {
        Ok(task_id) => task_id,
        Err(message) => return EntryActionResponse::failure(message),
    };
    match with_store(|store| store.toggle(task_id)) {
        Ok(Ok(())) => EntryActionResponse::done("Task toggled."),
        Ok(Err(err)) => EntryActionResponse::failure(format!("entry_toggle_task failed: {err}")),
        Err(err) => EntryActionResponse::failure(format!("entry_toggle_task failed: {err}")),
    }
}

/// Deletes one task permanently.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Never panics; malformed or unknown ids return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_delete_task(id: String) -> EntryActionResponse {
    let task_id = match parse_task_id(&id) {
        Ok(task_id) => task_id,
        Err(message) => return EntryActionResponse::failure(message),
    };
    match with_store(|store| store.delete(task_id)) {
        Ok(Ok(())) => EntryActionResponse::done("Task deleted."),
        Ok(Err(err)) => EntryActionResponse::failure(format!("entry_delete_task failed: {err}")),
        Err(err) => EntryActionResponse::failure(format!("entry_delete_task failed: {err}")),
    }
}

/// Switches the active list filter.
///
/// # FFI contract
/// - Sync call; accepts `all|active|completed`.
/// - Never panics; unknown labels return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_set_filter(filter: String) -> EntryActionResponse {
    let Some(parsed) = TaskFilter::parse(filter.trim()) else {
        return EntryActionResponse::failure(format!(
            "unknown filter `{filter}`; expected all|active|completed"
        ));
    };
    match with_store(|store| store.set_filter(parsed)) {
        Ok(()) => EntryActionResponse::done("Filter updated."),
        Err(err) => EntryActionResponse::failure(format!("entry_set_filter failed: {err}")),
    }
}

/// Lists tasks visible under the active filter.
///
/// # FFI contract
/// - Sync call returning a read-only snapshot.
/// - Never panics; failures return an empty list plus a message.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list_tasks() -> EntryListResponse {
    match with_store(|store| (store.query(), store.filter())) {
        Ok((tasks, filter)) => {
            let items = tasks.into_iter().map(to_entry_task_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No tasks.".to_string()
            } else {
                format!("Found {} task(s).", items.len())
            };
            EntryListResponse {
                items,
                filter: filter.label().to_string(),
                message,
            }
        }
        Err(err) => EntryListResponse {
            items: Vec::new(),
            filter: TaskFilter::default().label().to_string(),
            message: format!("entry_list_tasks failed: {err}"),
        },
    }
}

/// Returns aggregate counts over the full session list.
///
/// # FFI contract
/// - Sync call; counts cover the full list regardless of filter.
/// - Never panics; failures return zero counts plus a message.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_stats() -> EntryStatsResponse {
    match with_store(|store| store.stats()) {
        Ok(stats) => EntryStatsResponse {
            total: stats.total as u64,
            active: stats.active as u64,
            completed: stats.completed as u64,
            message: "Stats computed.".to_string(),
        },
        Err(err) => EntryStatsResponse {
            total: 0,
            active: 0,
            completed: 0,
            message: format!("entry_stats failed: {err}"),
        },
    }
}

/// Seeds the first-launch starter tasks when the session is empty.
///
/// # FFI contract
/// - Sync call; a no-op on a non-empty session reports `seeded=0`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_seed_welcome() -> EntrySeedResponse {
    match with_store(|store| store.seed_welcome_tasks()) {
        Ok(seeded) => EntrySeedResponse {
            ok: true,
            seeded: seeded as u64,
            message: if seeded == 0 {
                "Session already has tasks.".to_string()
            } else {
                format!("Seeded {seeded} starter task(s).")
            },
        },
        Err(err) => EntrySeedResponse {
            ok: false,
            seeded: 0,
            message: format!("entry_seed_welcome failed: {err}"),
        },
    }
}

fn with_store<T>(f: impl FnOnce(&mut TaskStore) -> T) -> Result<T, String> {
    let store = SESSION_STORE.get_or_init(|| {
        log::debug!("event=session_store_created module=ffi status=ok");
        Mutex::new(TaskStore::new())
    });
    match store.lock() {
        Ok(mut guard) => Ok(f(&mut guard)),
        Err(_) => Err("task session is unavailable (poisoned lock)".to_string()),
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid task id `{raw}`"))
}

fn to_entry_task_item(task: Task) -> EntryTaskItem {
    EntryTaskItem {
        task_id: task.id.to_string(),
        title: task.title,
        description: task.description,
        completed: task.completed,
        created_at_ms: task.created_at,
        completed_at_ms: task.completed_at,
    }
}
