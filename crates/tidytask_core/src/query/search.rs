//! Title search for type-as-you-search UX.
//!
//! # Responsibility
//! - Provide the case-insensitive substring predicate applied after
//!   category and status filtering.
//!
//! # Invariants
//! - A blank or whitespace-only query matches every task.
//! - Matching is case-insensitive over the task title only; custom fields
//!   are not searched.

use crate::model::task::Task;

/// Case-insensitive substring query over task titles.
///
/// The needle is trimmed and lowercased once at construction so matching
/// on every keystroke stays a plain substring scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Creates a query from raw UI input.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            needle: text.as_ref().trim().to_lowercase(),
        }
    }

    /// Returns whether this query filters nothing.
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether `task` matches the query.
    pub fn matches(&self, task: &Task) -> bool {
        self.is_blank() || task.text.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;
    use crate::model::task::{CustomFields, Task};

    fn task(title: &str) -> Task {
        Task::new(title, None, CustomFields::new())
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(SearchQuery::new("").matches(&task("anything")));
        assert!(SearchQuery::new("   ").matches(&task("anything")));
        assert!(SearchQuery::default().is_blank());
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let query = SearchQuery::new("MILK");

        assert!(query.matches(&task("Buy milk")));
        assert!(query.matches(&task("milkshake run")));
        assert!(!query.matches(&task("Call mom")));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let query = SearchQuery::new("  mom  ");

        assert!(query.matches(&task("Call mom")));
        assert!(!query.matches(&task("Buy milk")));
    }

    #[test]
    fn custom_fields_are_not_searched() {
        let mut fields = CustomFields::new();
        fields.insert("note".to_string(), "milk".to_string());
        let task = Task::new("Call mom", None, fields);

        assert!(!SearchQuery::new("milk").matches(&task));
    }
}
