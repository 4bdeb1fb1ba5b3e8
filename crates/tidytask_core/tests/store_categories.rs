use tidytask_core::{CategoryFilter, CustomFields, TaskStore, ALL_CATEGORY};

#[test]
fn new_store_seeds_only_the_reserved_category() {
    let store = TaskStore::new();

    let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, [ALL_CATEGORY]);
    assert!(store.tasks().is_empty());
}

#[test]
fn default_store_seeds_startup_buckets_in_display_order() {
    let store = TaskStore::with_default_categories();

    let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["All", "Work", "Personal", "Shopping"]);
}

#[test]
fn add_category_rejects_duplicates() {
    let mut store = TaskStore::new();

    assert!(store.add_category("Errands"));
    assert!(!store.add_category("Errands"));

    let matching = store
        .categories()
        .iter()
        .filter(|c| c.name == "Errands")
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn add_category_rejects_empty_name_without_mutation() {
    let mut store = TaskStore::new();

    assert!(!store.add_category(""));
    assert_eq!(store.categories().len(), 1);
}

#[test]
fn duplicate_check_is_exact_not_case_insensitive() {
    let mut store = TaskStore::new();

    assert!(store.add_category("Work"));
    assert!(store.add_category("work"));
}

#[test]
fn seeded_default_buckets_count_as_duplicates() {
    let mut store = TaskStore::with_default_categories();

    assert!(!store.add_category("Work"));
    assert!(!store.add_category("All"));
}

#[test]
fn delete_category_refuses_the_reserved_entry() {
    let mut store = TaskStore::new();
    store.add_task("survives", None, CustomFields::new());

    assert!(!store.delete_category(ALL_CATEGORY));
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn delete_category_cascades_to_its_tasks() {
    let mut store = TaskStore::new();
    store.add_category("Work");
    store.add_task("write report", Some("Work".to_string()), CustomFields::new());
    store.add_task("call mom", None, CustomFields::new());
    store.add_task("standup", Some("Work".to_string()), CustomFields::new());

    assert!(store.delete_category("Work"));

    assert!(store
        .tasks_by_category(&CategoryFilter::Name("Work".to_string()))
        .is_empty());
    let remaining = store.tasks_by_category(&CategoryFilter::All);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "call mom");
}

#[test]
fn delete_missing_category_is_a_silent_no_op_returning_true() {
    let mut store = TaskStore::new();

    assert!(store.delete_category("Nowhere"));
    assert_eq!(store.categories().len(), 1);
}

#[test]
fn cascade_does_not_touch_unregistered_lookalike_tasks() {
    // Tasks may reference names that were never registered; deleting a
    // different category must leave them alone.
    let mut store = TaskStore::new();
    store.add_category("Work");
    store.add_task("ghost", Some("Archive".to_string()), CustomFields::new());

    assert!(store.delete_category("Work"));
    assert_eq!(store.tasks().len(), 1);
}
