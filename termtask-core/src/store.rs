//! The task store: an ordered, index-addressed collection of tasks.

use crate::task::Task;

/// An ordered collection of [`Task`]s addressed by zero-based position.
///
/// Insertion order is significant: removing an element shifts every
/// later element down by one, so live indices are always the contiguous
/// range `0..len`. There is no task identity beyond position. Tasks are
/// created, mutated, and destroyed only through this store.
///
/// Out-of-range indices passed to [`remove_at`](TaskStore::remove_at)
/// and [`complete_at`](TaskStore::complete_at) are silently ignored;
/// no operation here returns an error. Callers that want to reject bad
/// input do so before reaching the store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a new pending task built from `description`.
    ///
    /// Always succeeds; the new task lands at index `len - 1`.
    pub fn add(&mut self, description: impl Into<String>) {
        let task = Task::new(description);
        tracing::debug!(description = task.description(), "task added");
        self.tasks.push(task);
    }

    /// Removes the task at `index`, shifting later tasks down by one.
    ///
    /// An out-of-range index is silently ignored.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        } else {
            tracing::debug!(index, len = self.tasks.len(), "remove_at: index out of range, ignored");
        }
    }

    /// Marks the task at `index` as completed.
    ///
    /// Idempotent for in-range indices. An out-of-range index is
    /// silently ignored, same policy as [`remove_at`](TaskStore::remove_at).
    pub fn complete_at(&mut self, index: usize) {
        let len = self.tasks.len();
        if let Some(task) = self.tasks.get_mut(index) {
            task.mark_completed();
        } else {
            tracing::debug!(index, len, "complete_at: index out of range, ignored");
        }
    }

    /// Returns the full ordered sequence of tasks as a read-only view.
    #[must_use]
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the pending tasks, in the same relative order as
    /// [`list_all`](TaskStore::list_all). Built fresh on every call.
    #[must_use]
    pub fn list_pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.is_completed()).collect()
    }

    /// Returns the number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
