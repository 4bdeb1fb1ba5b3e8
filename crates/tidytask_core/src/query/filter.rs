//! Category and completion-status filters.
//!
//! # Responsibility
//! - Give the UI's string-shaped filter selections a typed form.
//! - Define exact match semantics for category and status predicates.
//!
//! # Invariants
//! - `CategoryFilter::All` matches every task; it is not a name match.
//! - Uncategorized tasks never match a `Name` filter, including the name
//!   `"All"` arriving through `from_name`.

use crate::model::category::ALL_CATEGORY;
use crate::model::task::Task;

/// Category dimension of a task view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering; the full task sequence.
    #[default]
    All,
    /// Tasks whose category is unset.
    Uncategorized,
    /// Tasks whose category equals this exact name.
    Name(String),
}

impl CategoryFilter {
    /// Parses a UI category selection.
    ///
    /// The reserved `"All"` name maps to the sentinel case; every other
    /// string is an exact-name filter. Registration is not checked, so a
    /// never-registered name simply produces an empty view.
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CATEGORY {
            Self::All
        } else {
            Self::Name(name.to_string())
        }
    }

    /// Parses an optional selection, mapping `None` to `Uncategorized`.
    pub fn from_selection(name: Option<&str>) -> Self {
        match name {
            None => Self::Uncategorized,
            Some(name) => Self::from_name(name),
        }
    }

    /// Returns whether `task` belongs to this view.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Uncategorized => task.category.is_none(),
            Self::Name(name) => task.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// Completion dimension of a task view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No filtering on completion state.
    #[default]
    Any,
    /// Completed tasks only.
    Completed,
    /// Not-yet-completed tasks only.
    Incomplete,
}

impl StatusFilter {
    /// Parses the UI filter menu labels.
    ///
    /// Unknown labels fall back to `Any`, matching the menu's "All" entry
    /// and keeping stale labels harmless.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Completed" => Self::Completed,
            "Incomplete" => Self::Incomplete,
            _ => Self::Any,
        }
    }

    /// Returns whether `task` passes this completion filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Any => true,
            Self::Completed => task.completed,
            Self::Incomplete => !task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, StatusFilter};
    use crate::model::task::{CustomFields, Task};

    fn task_in(category: Option<&str>) -> Task {
        Task::new("t", category.map(str::to_string), CustomFields::new())
    }

    #[test]
    fn from_name_maps_reserved_name_to_sentinel() {
        assert_eq!(CategoryFilter::from_name("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_name("Work"),
            CategoryFilter::Name("Work".to_string())
        );
    }

    #[test]
    fn from_selection_maps_none_to_uncategorized() {
        assert_eq!(
            CategoryFilter::from_selection(None),
            CategoryFilter::Uncategorized
        );
        assert_eq!(
            CategoryFilter::from_selection(Some("All")),
            CategoryFilter::All
        );
    }

    #[test]
    fn uncategorized_tasks_never_match_a_name() {
        let task = task_in(None);

        assert!(CategoryFilter::All.matches(&task));
        assert!(CategoryFilter::Uncategorized.matches(&task));
        assert!(!CategoryFilter::Name("All".to_string()).matches(&task));
        assert!(!CategoryFilter::Name("Work".to_string()).matches(&task));
    }

    #[test]
    fn status_filter_partitions_on_completed_flag() {
        let open = task_in(Some("Work"));
        let mut done = task_in(Some("Work"));
        done.complete();

        assert!(StatusFilter::Any.matches(&open));
        assert!(StatusFilter::Any.matches(&done));
        assert!(StatusFilter::Completed.matches(&done));
        assert!(!StatusFilter::Completed.matches(&open));
        assert!(StatusFilter::Incomplete.matches(&open));
        assert!(!StatusFilter::Incomplete.matches(&done));
    }

    #[test]
    fn unknown_status_labels_fall_back_to_any() {
        assert_eq!(StatusFilter::from_name("All"), StatusFilter::Any);
        assert_eq!(StatusFilter::from_name("completed"), StatusFilter::Any);
        assert_eq!(StatusFilter::from_name("Completed"), StatusFilter::Completed);
    }
}
