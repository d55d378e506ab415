//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tidytask_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tidytask_core::{TaskFilter, TaskStore};

fn main() {
    println!("tidytask_core ping={}", tidytask_core::ping());
    println!("tidytask_core version={}", tidytask_core::core_version());

    // One create/toggle round through a locally owned store, independent of
    // the Flutter/FFI runtime setup.
    let mut store = TaskStore::new();
    match store.create("Buy milk", None) {
        Ok(task) => {
            if let Err(err) = store.toggle(task.id) {
                println!("tidytask_core toggle error={err}");
            }
        }
        Err(err) => println!("tidytask_core create error={err}"),
    }

    store.set_filter(TaskFilter::Completed);
    let stats = store.stats();
    println!(
        "tidytask_core smoke total={} active={} completed={} visible={}",
        stats.total,
        stats.active,
        stats.completed,
        store.query().len()
    );
}
