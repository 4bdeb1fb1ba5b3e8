//! To-do use-case service.
//!
//! # Responsibility
//! - Provide the entry points the FFI/UI layer calls: composed task views,
//!   validated task creation, category and task mutations.
//! - Emit metadata-only diagnostic events for every mutation outcome.
//!
//! # Invariants
//! - View composition order is fixed: category, then status, then search.
//! - Index-addressed mutations are scoped to the category view only, never
//!   to the status/search-narrowed view.
//! - Log events carry counts and outcomes, never task or category text.

use crate::model::task::{CustomFields, Task};
use crate::query::filter::CategoryFilter;
use crate::query::TaskViewQuery;
use crate::store::task_store::TaskStore;
use log::{info, warn};

/// Use-case facade over the in-memory task store.
pub struct TodoService {
    store: TaskStore,
}

impl TodoService {
    /// Creates a service owning the given store.
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Category names in display order.
    pub fn category_names(&self) -> Vec<String> {
        self.store
            .categories()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Adds a category; `false` on empty or duplicate names.
    pub fn add_category(&mut self, name: &str) -> bool {
        let added = self.store.add_category(name);
        if added {
            info!(
                "event=category_add module=service status=ok category_count={}",
                self.store.categories().len()
            );
        } else {
            warn!("event=category_add module=service status=error error_code=invalid_or_duplicate_name");
        }
        added
    }

    /// Deletes a category and its tasks; `false` for the reserved entry.
    pub fn delete_category(&mut self, name: &str) -> bool {
        let task_count_before = self.store.tasks().len();
        let deleted = self.store.delete_category(name);
        if deleted {
            info!(
                "event=category_delete module=service status=ok cascaded_tasks={}",
                task_count_before - self.store.tasks().len()
            );
        } else {
            warn!("event=category_delete module=service status=error error_code=protected_category");
        }
        deleted
    }

    /// Lists tasks through the composed view pipeline.
    ///
    /// Applies the category filter, then the status filter, then search,
    /// preserving creation order throughout.
    pub fn list_tasks(&self, view: &TaskViewQuery) -> Vec<&Task> {
        self.store
            .tasks_by_category(&view.category)
            .into_iter()
            .filter(|t| view.status.matches(t))
            .filter(|t| view.search.matches(t))
            .collect()
    }

    /// Appends a task without validation; always succeeds.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        category: Option<String>,
        custom_fields: CustomFields,
    ) -> &Task {
        let task = self.store.add_task(title, category, custom_fields);
        info!(
            "event=task_add module=service status=ok category_set={} field_count={}",
            task.category.is_some(),
            task.custom_fields.len()
        );
        task
    }

    /// Appends a task after rejecting blank titles.
    ///
    /// Returns `None` without mutation when the title trims to empty; the
    /// UI shows its own "cannot be empty" message on that path.
    pub fn add_task_validated(
        &mut self,
        title: &str,
        category: Option<String>,
        custom_fields: CustomFields,
    ) -> Option<&Task> {
        if title.trim().is_empty() {
            warn!("event=task_add module=service status=error error_code=blank_title");
            return None;
        }
        Some(self.add_task(title, category, custom_fields))
    }

    /// Edits title and custom fields of the task at `index` in the
    /// category view. Never changes the task's category.
    pub fn edit_task(
        &mut self,
        index: usize,
        filter: &CategoryFilter,
        title: &str,
        custom_fields: CustomFields,
    ) -> bool {
        let edited = self.store.edit_task(index, filter, title, custom_fields);
        self.log_indexed_outcome("task_edit", index, edited);
        edited
    }

    /// Completes the task at `index` in the category view.
    pub fn complete_task(&mut self, index: usize, filter: &CategoryFilter) -> bool {
        let completed = self.store.complete_task(index, filter);
        self.log_indexed_outcome("task_complete", index, completed);
        completed
    }

    /// Deletes the task at `index` in the category view.
    pub fn delete_task(&mut self, index: usize, filter: &CategoryFilter) -> bool {
        let deleted = self.store.delete_task(index, filter);
        self.log_indexed_outcome("task_delete", index, deleted);
        deleted
    }

    fn log_indexed_outcome(&self, event: &str, index: usize, ok: bool) {
        if ok {
            info!("event={event} module=service status=ok index={index}");
        } else {
            warn!(
                "event={event} module=service status=error error_code=index_out_of_range index={index}"
            );
        }
    }
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new(TaskStore::new())
    }
}
