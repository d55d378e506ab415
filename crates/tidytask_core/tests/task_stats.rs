use tidytask_core::{TaskFilter, TaskStats, TaskStore};

fn assert_counts_consistent(store: &TaskStore) {
    let stats = store.stats();
    assert_eq!(
        stats.active + stats.completed,
        stats.total,
        "active + completed must always equal total"
    );
}

#[test]
fn stats_on_empty_store_are_zero() {
    let store = TaskStore::new();
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 0,
            active: 0,
            completed: 0
        }
    );
}

#[test]
fn stats_invariant_holds_after_every_operation() {
    let mut store = TaskStore::new();
    assert_counts_consistent(&store);

    let first = store.create("first", None).unwrap();
    assert_counts_consistent(&store);

    let second = store.create("second", Some("details")).unwrap();
    assert_counts_consistent(&store);

    store.toggle(first.id).unwrap();
    assert_counts_consistent(&store);

    store.toggle(first.id).unwrap();
    assert_counts_consistent(&store);

    store.toggle(second.id).unwrap();
    assert_counts_consistent(&store);

    store.set_filter(TaskFilter::Active);
    assert_counts_consistent(&store);

    store.delete(first.id).unwrap();
    assert_counts_consistent(&store);

    store.delete(second.id).unwrap();
    assert_counts_consistent(&store);

    // Failed operations must not move any count.
    let before = store.stats();
    assert!(store.create("  ", None).is_err());
    assert!(store.toggle(first.id).is_err());
    assert_eq!(store.stats(), before);
}

#[test]
fn stats_count_independently_of_active_filter() {
    let mut store = TaskStore::new();
    let task = store.create("counted", None).unwrap();
    store.toggle(task.id).unwrap();

    store.set_filter(TaskFilter::Active);
    // The filtered view is empty, yet the counts cover the full list.
    assert!(store.query().is_empty());
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 1,
            active: 0,
            completed: 1
        }
    );
}

#[test]
fn buy_milk_scenario() {
    let mut store = TaskStore::new();

    let created = store.create("Buy milk", None).unwrap();
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 1,
            active: 1,
            completed: 0
        }
    );

    store.toggle(created.id).unwrap();
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 1,
            active: 0,
            completed: 1
        }
    );
    assert!(store.get(created.id).unwrap().completed_at.is_some());

    store.set_filter(TaskFilter::Completed);
    let listed = store.query();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    store.delete(created.id).unwrap();
    assert_eq!(store.stats().total, 0);
}
