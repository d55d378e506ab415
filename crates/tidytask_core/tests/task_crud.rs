use std::collections::HashSet;
use tidytask_core::{StoreError, TaskStore, TaskValidationError};
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let mut store = TaskStore::new();

    let created = store.create("Buy milk", Some("2L, whole")).unwrap();

    let loaded = store.get(created.id).unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.title, "Buy milk");
    assert_eq!(loaded.description.as_deref(), Some("2L, whole"));
    assert!(!loaded.completed);
    assert_eq!(loaded.completed_at, None);
    assert!(loaded.created_at > 0);
}

#[test]
fn create_trims_title_and_description() {
    let mut store = TaskStore::new();

    let created = store.create("  Buy milk  ", Some("  from the corner shop  ")).unwrap();

    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description.as_deref(), Some("from the corner shop"));
}

#[test]
fn create_normalizes_blank_description_to_absent() {
    let mut store = TaskStore::new();

    let with_blank = store.create("no details", Some("   ")).unwrap();
    assert_eq!(with_blank.description, None);

    let with_none = store.create("still no details", None).unwrap();
    assert_eq!(with_none.description, None);
}

#[test]
fn create_rejects_empty_after_trim_title() {
    let mut store = TaskStore::new();

    let err = store.create("   ", None).unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(TaskValidationError::EmptyTitle)
    );
    assert_eq!(store.stats().total, 0);
}

#[test]
fn create_rejects_over_length_input() {
    let mut store = TaskStore::new();

    let long_title = "t".repeat(101);
    let err = store.create(&long_title, None).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::TitleTooLong { chars: 101 })
    ));

    let long_description = "d".repeat(501);
    let err = store.create("fine title", Some(&long_description)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::DescriptionTooLong { chars: 501 })
    ));

    assert!(store.is_empty());
}

#[test]
fn create_prepends_newest_first() {
    let mut store = TaskStore::new();

    let first = store.create("first", None).unwrap();
    let second = store.create("second", None).unwrap();

    let listed = store.query();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn created_ids_are_unique() {
    let mut store = TaskStore::new();

    let mut ids = HashSet::new();
    for index in 0..20 {
        let created = store.create(&format!("task {index}"), None).unwrap();
        ids.insert(created.id);
    }
    assert_eq!(ids.len(), 20);
}

#[test]
fn toggle_sets_and_clears_completion_instant() {
    let mut store = TaskStore::new();
    let created = store.create("toggle me", None).unwrap();

    store.toggle(created.id).unwrap();
    let completed = store.get(created.id).unwrap();
    assert!(completed.completed);
    let completed_at = completed.completed_at.expect("completion instant should be set");
    assert!(completed_at >= created.created_at);

    store.toggle(created.id).unwrap();
    let reopened = store.get(created.id).unwrap();
    assert!(!reopened.completed);
    assert_eq!(reopened.completed_at, None);
}

#[test]
fn toggle_preserves_position_and_other_fields() {
    let mut store = TaskStore::new();
    let bottom = store.create("bottom", None).unwrap();
    let middle = store.create("middle", Some("in between")).unwrap();
    let top = store.create("top", None).unwrap();

    store.toggle(middle.id).unwrap();

    let listed = store.query();
    let order: Vec<_> = listed.iter().map(|task| task.id).collect();
    assert_eq!(order, vec![top.id, middle.id, bottom.id]);

    let toggled = store.get(middle.id).unwrap();
    assert_eq!(toggled.title, "middle");
    assert_eq!(toggled.description.as_deref(), Some("in between"));
    assert_eq!(toggled.created_at, middle.created_at);
}

#[test]
fn toggle_unknown_id_returns_not_found() {
    let mut store = TaskStore::new();
    store.create("unrelated", None).unwrap();

    let missing = Uuid::new_v4();
    let err = store.toggle(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn delete_removes_task_permanently() {
    let mut store = TaskStore::new();
    let keep = store.create("keep", None).unwrap();
    let drop = store.create("drop", None).unwrap();

    store.delete(drop.id).unwrap();

    assert_eq!(store.stats().total, 1);
    assert!(store.get(drop.id).is_none());
    assert!(store.get(keep.id).is_some());
}

#[test]
fn delete_unknown_id_returns_not_found() {
    let mut store = TaskStore::new();

    let missing = Uuid::new_v4();
    let err = store.delete(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn deleted_id_behaves_as_never_existing() {
    let mut store = TaskStore::new();
    let created = store.create("ephemeral", None).unwrap();

    store.delete(created.id).unwrap();
    assert_eq!(store.stats().total, 0);

    let toggle_err = store.toggle(created.id).unwrap_err();
    assert!(matches!(toggle_err, StoreError::NotFound(id) if id == created.id));

    let delete_err = store.delete(created.id).unwrap_err();
    assert!(matches!(delete_err, StoreError::NotFound(id) if id == created.id));

    // The failed retries must not change counts again.
    assert_eq!(store.stats().total, 0);
}
