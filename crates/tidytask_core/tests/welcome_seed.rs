use tidytask_core::TaskStore;

#[test]
fn seed_on_empty_store_creates_two_starter_tasks() {
    let mut store = TaskStore::new();

    let seeded = store.seed_welcome_tasks();
    assert_eq!(seeded, 2);

    let listed = store.query();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Welcome to your To-Do App!");
    assert_eq!(listed[1].title, "Add a new task");
    assert!(listed.iter().all(|task| !task.completed));
    assert!(listed.iter().all(|task| task.description.is_some()));
}

#[test]
fn seed_on_non_empty_store_is_noop() {
    let mut store = TaskStore::new();
    store.create("already here", None).unwrap();

    assert_eq!(store.seed_welcome_tasks(), 0);
    assert_eq!(store.stats().total, 1);
}

#[test]
fn repeated_seed_does_not_duplicate() {
    let mut store = TaskStore::new();

    assert_eq!(store.seed_welcome_tasks(), 2);
    assert_eq!(store.seed_welcome_tasks(), 0);
    assert_eq!(store.stats().total, 2);
}

#[test]
fn seeded_tasks_are_ordinary_tasks() {
    let mut store = TaskStore::new();
    store.seed_welcome_tasks();

    let welcome = store.query()[0].clone();
    store.toggle(welcome.id).unwrap();
    assert!(store.get(welcome.id).unwrap().completed);

    store.delete(welcome.id).unwrap();
    assert_eq!(store.stats().total, 1);
}
