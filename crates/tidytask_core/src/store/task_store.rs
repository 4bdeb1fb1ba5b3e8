//! Ordered in-memory store for categories and tasks.
//!
//! # Responsibility
//! - Hold the single authoritative copy of all categories and tasks.
//! - Implement category CRUD with cascade delete and filtered task views.
//! - Implement index-addressed task mutations against filtered views.
//!
//! # Invariants
//! - `categories` keeps insertion order (display order); names are unique.
//! - `tasks` keeps creation order; it is the base order of every view.
//! - Index-addressed mutations resolve `(index, filter)` to a stable task
//!   identity before mutating, so removal never shifts the wrong row.
//!
//! # Index addressing
//! Mutation indices are positions in `tasks_by_category(filter)` recomputed
//! at call time, not positions in the full sequence. Callers must address
//! rows through the same filter that produced the list they rendered;
//! a filter mismatch silently targets a different task.

use crate::model::category::{Category, ALL_CATEGORY};
use crate::model::task::{CustomFields, Task, TaskId};
use crate::query::filter::CategoryFilter;

/// Default user-facing buckets seeded at first launch.
const DEFAULT_CATEGORIES: [&str; 3] = ["Work", "Personal", "Shopping"];

/// In-memory controller owning the category and task sequences.
///
/// The store performs no locking of its own; callers serialize access
/// (the FFI layer drives it from the single UI event thread).
#[derive(Debug, Clone)]
pub struct TaskStore {
    categories: Vec<Category>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates a store seeded with only the reserved "All" category.
    pub fn new() -> Self {
        Self {
            categories: vec![Category::new(ALL_CATEGORY)],
            tasks: Vec::new(),
        }
    }

    /// Creates a store seeded with the application's startup buckets.
    ///
    /// Seeds "All" plus Work/Personal/Shopping in display order.
    pub fn with_default_categories() -> Self {
        let mut store = Self::new();
        for name in DEFAULT_CATEGORIES {
            store.add_category(name);
        }
        store
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Full task sequence in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Adds a category.
    ///
    /// Returns `true` and appends iff `name` is non-empty and no existing
    /// category carries that exact name. Returns `false` otherwise with no
    /// mutation; the caller branches on the result.
    pub fn add_category(&mut self, name: &str) -> bool {
        if name.is_empty() || self.categories.iter().any(|c| c.name == name) {
            return false;
        }
        self.categories.push(Category::new(name));
        true
    }

    /// Deletes a category and cascades to its tasks.
    ///
    /// Returns `false` with no mutation for the reserved "All" category.
    /// Otherwise removes the category if present (a missing name is a
    /// silent no-op), removes every task whose `category` equals `name`,
    /// and returns `true`.
    pub fn delete_category(&mut self, name: &str) -> bool {
        if name == ALL_CATEGORY {
            return false;
        }
        self.categories.retain(|c| c.name != name);
        self.tasks.retain(|t| t.category.as_deref() != Some(name));
        true
    }

    /// Returns tasks matching `filter`, in creation order.
    ///
    /// The returned references alias the stored tasks; the store itself is
    /// never mutated by this call.
    pub fn tasks_by_category(&self, filter: &CategoryFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Appends a new task and returns it.
    ///
    /// Always succeeds: titles are not validated here and `category` may
    /// name a bucket that was never registered.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        category: Option<String>,
        custom_fields: CustomFields,
    ) -> &Task {
        self.tasks.push(Task::new(title, category, custom_fields));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Replaces the title and custom fields of the task at `index` within
    /// the `filter` view.
    ///
    /// Custom fields are replaced wholesale, never merged. The task's
    /// `category` is left untouched: the filter parameter addresses the
    /// row, it does not move the task. Returns `false` with no mutation
    /// when `index` is out of range for the view.
    pub fn edit_task(
        &mut self,
        index: usize,
        filter: &CategoryFilter,
        title: &str,
        custom_fields: CustomFields,
    ) -> bool {
        let Some(id) = self.resolve_index(index, filter) else {
            return false;
        };
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.text = title.to_string();
        task.custom_fields = custom_fields;
        true
    }

    /// Marks the task at `index` within the `filter` view completed.
    ///
    /// Idempotent: completing an already-completed task still returns
    /// `true`. Returns `false` when `index` is out of range.
    pub fn complete_task(&mut self, index: usize, filter: &CategoryFilter) -> bool {
        let Some(id) = self.resolve_index(index, filter) else {
            return false;
        };
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.complete();
        true
    }

    /// Removes the task at `index` within the `filter` view.
    ///
    /// Removal is by task identity, not by position in the full sequence.
    /// Returns `false` when `index` is out of range.
    pub fn delete_task(&mut self, index: usize, filter: &CategoryFilter) -> bool {
        let Some(id) = self.resolve_index(index, filter) else {
            return false;
        };
        self.tasks.retain(|t| t.id != id);
        true
    }

    /// Resolves a view position to the stable identity of the task there.
    fn resolve_index(&self, index: usize, filter: &CategoryFilter) -> Option<TaskId> {
        self.tasks_by_category(filter).get(index).map(|t| t.id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
