//! The task entity: one to-do item and its canonical text rendering.

use std::fmt;

/// One to-do item with a description and a completion flag.
///
/// The description is fixed at construction. The completion flag starts
/// out pending and can only transition to completed via
/// [`Task::mark_completed`]; there is no way back.
///
/// The [`Display`](fmt::Display) rendering is the canonical fixed
/// format `Task: {description} | Status: {Completed|Pending}`, derived
/// from the current state on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// What needs to be done.
    description: String,
    /// Whether the task has been completed.
    completed: bool,
}

impl Task {
    /// Creates a new pending task with the given description.
    ///
    /// Descriptions are accepted verbatim, the empty string included.
    /// Callers with stricter input rules enforce them before
    /// constructing the task.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Marks the task as completed. Idempotent.
    pub const fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the status label used in the canonical rendering.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task: {} | Status: {}",
            self.description,
            self.status_label()
        )
    }
}
