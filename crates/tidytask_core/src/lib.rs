//! Core domain logic for TidyTask.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, ALL_CATEGORY};
pub use model::task::{normalize_custom_fields, CustomFields, Task, TaskId};
pub use query::filter::{CategoryFilter, StatusFilter};
pub use query::search::SearchQuery;
pub use query::TaskViewQuery;
pub use service::todo_service::TodoService;
pub use store::task_store::TaskStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
