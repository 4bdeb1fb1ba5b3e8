//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the process-global store instance for the running UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Mutation indices are positions in the category-filtered view the UI
//!   rendered last; the UI must pass the same category it rendered with.
//! - Return envelopes carry `ok`/`message` instead of thrown errors.

use std::sync::{Mutex, MutexGuard, OnceLock};
use tidytask_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, normalize_custom_fields, ping as ping_inner,
    CategoryFilter, SearchQuery, StatusFilter, Task, TaskStore, TaskViewQuery, TodoService,
};

static SERVICE: OnceLock<Mutex<TodoService>> = OnceLock::new();

fn service() -> &'static Mutex<TodoService> {
    SERVICE.get_or_init(|| Mutex::new(TodoService::new(TaskStore::with_default_categories())))
}

fn lock_service() -> Result<MutexGuard<'static, TodoService>, String> {
    service()
        .lock()
        .map_err(|_| "task store is unavailable: lock poisoned".to_string())
}

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

/// Returns the default log level for the current build mode.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
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

/// One custom key/value field in FFI-flat form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFieldEntry {
    pub key: String,
    pub value: String,
}

/// Task row returned by [`list_tasks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form, usable as a UI row key.
    pub id: String,
    /// Display title.
    pub text: String,
    /// Owning category name; `None` for uncategorized.
    pub category: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Custom fields in key order.
    pub custom_fields: Vec<CustomFieldEntry>,
}

impl TaskItem {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            text: task.text.clone(),
            category: task.category.clone(),
            completed: task.completed,
            custom_fields: task
                .custom_fields
                .iter()
                .map(|(key, value)| CustomFieldEntry {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

/// List response envelope for task queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Matching tasks in creation order (empty on failure).
    pub items: Vec<TaskItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Stable ID of the created task, when one was created.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            task_id: None,
            message: message.into(),
        }
    }

    fn created(message: impl Into<String>, task_id: String) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
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

/// Lists category names in display order.
///
/// # FFI contract
/// - Sync call; never panics.
/// - The reserved "All" entry is always first.
#[flutter_rust_bridge::frb(sync)]
pub fn list_categories() -> Vec<String> {
    match lock_service() {
        Ok(service) => service.category_names(),
        Err(_) => Vec::new(),
    }
}

/// Adds a category.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Fails (ok=false) on empty or duplicate names; the UI message for that
///   case is presentation-owned.
#[flutter_rust_bridge::frb(sync)]
pub fn add_category(name: String) -> ActionResponse {
    let mut service = match lock_service() {
        Ok(service) => service,
        Err(err) => return ActionResponse::failure(err),
    };
    if service.add_category(name.as_str()) {
        ActionResponse::success("category added")
    } else {
        ActionResponse::failure("category name is empty or already exists")
    }
}

/// Deletes a category and every task in it.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Fails (ok=false) only for the reserved "All" entry; deleting an
///   unknown name succeeds as a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_category(name: String) -> ActionResponse {
    let mut service = match lock_service() {
        Ok(service) => service,
        Err(err) => return ActionResponse::failure(err),
    };
    if service.delete_category(name.as_str()) {
        ActionResponse::success("category deleted")
    } else {
        ActionResponse::failure("the All category cannot be deleted")
    }
}

/// Lists tasks for the UI's current view state.
///
/// Input semantics:
/// - `category`: selected category name; the literal `"All"` means no
///   category filtering.
/// - `status_filter`: `All|Completed|Incomplete` menu label; unknown
///   labels mean no status filtering.
/// - `search`: raw search box text; blank means no search filtering.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Row order is task creation order; row index within a plain category
///   view (no status/search narrowing) is the index mutation calls expect.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks(category: String, status_filter: String, search: String) -> TaskListResponse {
    let service = match lock_service() {
        Ok(service) => service,
        Err(err) => {
            return TaskListResponse {
                items: Vec::new(),
                message: err,
            }
        }
    };
    let view = TaskViewQuery {
        category: CategoryFilter::from_name(category.as_str()),
        status: StatusFilter::from_name(status_filter.as_str()),
        search: SearchQuery::new(search),
    };
    let items = service
        .list_tasks(&view)
        .into_iter()
        .map(TaskItem::from_task)
        .collect::<Vec<_>>();
    TaskListResponse {
        items,
        message: String::new(),
    }
}

/// Adds a task under the given category selection.
///
/// Input semantics:
/// - `category`: `None` creates an uncategorized task; a name is stored
///   as-is, registered or not.
/// - `custom_fields`: dialog rows; keys/values are trimmed and rows with
///   blank keys are dropped.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Fails (ok=false) when the title is blank; returns the created task's
///   stable ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(
    title: String,
    category: Option<String>,
    custom_fields: Vec<CustomFieldEntry>,
) -> ActionResponse {
    let mut service = match lock_service() {
        Ok(service) => service,
        Err(err) => return ActionResponse::failure(err),
    };
    let fields = normalize_custom_fields(
        custom_fields
            .iter()
            .map(|entry| (entry.key.as_str(), entry.value.as_str())),
    );
    match service.add_task_validated(title.as_str(), category, fields) {
        Some(task) => ActionResponse::created("task added", task.id.to_string()),
        None => ActionResponse::failure("task name cannot be empty"),
    }
}

/// Edits title and custom fields of the task at `index` in the category
/// view. The task's category is never changed by this call.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Fails (ok=false) when `index` is out of range for the view.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_task(
    index: u32,
    category: String,
    title: String,
    custom_fields: Vec<CustomFieldEntry>,
) -> ActionResponse {
    let mut service = match lock_service() {
        Ok(service) => service,
        Err(err) => return ActionResponse::failure(err),
    };
    let filter = CategoryFilter::from_name(category.as_str());
    let fields = normalize_custom_fields(
        custom_fields
            .iter()
            .map(|entry| (entry.key.as_str(), entry.value.as_str())),
    );
    if service.edit_task(index as usize, &filter, title.as_str(), fields) {
        ActionResponse::success("task updated")
    } else {
        ActionResponse::failure("task index is out of range")
    }
}

/// Completes the task at `index` in the category view. Idempotent.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Fails (ok=false) when `index` is out of range for the view.
#[flutter_rust_bridge::frb(sync)]
pub fn complete_task(index: u32, category: String) -> ActionResponse {
    let mut service = match lock_service() {
        Ok(service) => service,
        Err(err) => return ActionResponse::failure(err),
    };
    let filter = CategoryFilter::from_name(category.as_str());
    if service.complete_task(index as usize, &filter) {
        ActionResponse::success("task completed")
    } else {
        ActionResponse::failure("task index is out of range")
    }
}

/// Deletes the task at `index` in the category view.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Fails (ok=false) when `index` is out of range for the view.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(index: u32, category: String) -> ActionResponse {
    let mut service = match lock_service() {
        Ok(service) => service,
        Err(err) => return ActionResponse::failure(err),
    };
    let filter = CategoryFilter::from_name(category.as_str());
    if service.delete_task(index as usize, &filter) {
        ActionResponse::success("task deleted")
    } else {
        ActionResponse::failure("task index is out of range")
    }
}
