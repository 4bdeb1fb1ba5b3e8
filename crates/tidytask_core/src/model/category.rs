//! Category domain model.
//!
//! # Responsibility
//! - Define the named bucket tasks are grouped under.
//! - Centralize the reserved "All" sentinel name.
//!
//! # Invariants
//! - `name` is unique within a store and acts as the identifier.
//! - A category is never renamed after creation.

use serde::{Deserialize, Serialize};

/// Reserved category name meaning "no filter".
///
/// The store guarantees a category with this name always exists and refuses
/// to delete it. Filtering by it returns the full task sequence.
pub const ALL_CATEGORY: &str = "All";

/// Named task bucket.
///
/// Carries no state beyond its name; the name is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    /// Creates a category with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns whether this is the reserved "no filter" entry.
    pub fn is_all(&self) -> bool {
        self.name == ALL_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, ALL_CATEGORY};

    #[test]
    fn is_all_only_matches_reserved_name() {
        assert!(Category::new(ALL_CATEGORY).is_all());
        assert!(!Category::new("Work").is_all());
        assert!(!Category::new("all").is_all());
    }
}
