//! Core task model for `TermTask`.
//!
//! Holds the [`Task`] entity and the [`TaskStore`] collection. The
//! store is a plain in-memory, single-threaded structure: no
//! persistence, no locking, no async. Every consumer (console menu,
//! TUI form, tests) constructs its own store instance.

pub mod store;
pub mod task;

pub use store::TaskStore;
pub use task::Task;
