//! Typed query values for task views.
//!
//! # Responsibility
//! - Model the three view inputs the UI owns transiently: selected
//!   category, completion filter, and search text.
//! - Keep predicate composition order stable: category, then status, then
//!   search.
//!
//! # Invariants
//! - Query values never mutate store state.
//! - The reserved "All" name is parsed into an explicit sentinel case, and
//!   "uncategorized" is a distinct state rather than a magic string.

pub mod filter;
pub mod search;

use filter::{CategoryFilter, StatusFilter};
use search::SearchQuery;

/// Composed view query: category, then completion status, then search.
#[derive(Debug, Clone, Default)]
pub struct TaskViewQuery {
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub search: SearchQuery,
}

impl TaskViewQuery {
    /// Creates a query showing everything under the given category filter.
    pub fn for_category(category: CategoryFilter) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }
}
