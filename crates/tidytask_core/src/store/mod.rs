//! In-memory session store.
//!
//! # Responsibility
//! - Own the canonical task list and active filter for one app session.
//! - Route every mutation through validating entry points.
//!
//! # Invariants
//! - Store state is transient; nothing survives the process.
//! - Consumers receive snapshots and never mutate store state directly.

pub mod task_store;
