//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its lifecycle helpers.
//! - Normalize free-form custom fields coming from dialog-style input.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed` only ever transitions false -> true through store
//!   operations; there is no exposed "uncomplete".
//! - `category == None` means uncategorized and is distinct from any
//!   category name, including the reserved "All".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Free-form key/value metadata attached to a task.
///
/// A sorted map keeps iteration deterministic for rendering and
/// serialization; key uniqueness comes with the map.
pub type CustomFields = BTreeMap<String, String>;

/// Canonical task record.
///
/// The `category` field is an unchecked reference by name: the store does
/// not enforce that it names a registered category, and deleting a category
/// cascade-deletes the tasks referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for identity-based removal and UI row keys.
    pub id: TaskId,
    /// Display title.
    pub text: String,
    /// Owning category name, or `None` for uncategorized.
    pub category: Option<String>,
    /// Free-form key/value metadata, replaced wholesale on edit.
    pub custom_fields: CustomFields,
    /// Completion flag. Defaults to `false` at creation.
    pub completed: bool,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    pub fn new(
        text: impl Into<String>,
        category: Option<String>,
        custom_fields: CustomFields,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), text, category, custom_fields)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        category: Option<String>,
        custom_fields: CustomFields,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            custom_fields,
            completed: false,
        }
    }

    /// Marks this task completed. Idempotent.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns whether this task is uncategorized.
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_none()
    }
}

/// Normalizes dialog-shaped custom field input.
///
/// Keys and values are trimmed; entries whose key trims to empty are
/// dropped. Duplicate keys collapse to the last value seen.
pub fn normalize_custom_fields<I, K, V>(entries: I) -> CustomFields
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut fields = CustomFields::new();
    for (key, value) in entries {
        let key = key.as_ref().trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), value.as_ref().trim().to_string());
    }
    fields
}
