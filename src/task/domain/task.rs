//! The task record type.

use super::{CreateTaskInput, TaskId, UpdateTaskInput};
use serde::{Deserialize, Serialize};

/// The sole persisted record type tracked by the system.
///
/// `task_id` and `task_name` are fixed at creation; the remaining four
/// attributes are mutable through the update operation. Serde names match
/// the table's attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "task_id")]
    task_id: TaskId,
    task_name: String,
    assigned_to: String,
    start_date: String,
    end_date: String,
    status: String,
}

/// Parameter object for reconstructing a persisted task record.
///
/// Attributes absent from the stored item (possible on records materialised
/// by an update against an unknown identifier) are carried as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTask {
    /// Persisted task identifier.
    pub task_id: TaskId,
    /// Persisted task name.
    pub task_name: String,
    /// Persisted assignee.
    pub assigned_to: String,
    /// Persisted start date string.
    pub start_date: String,
    /// Persisted end date string.
    pub end_date: String,
    /// Persisted status.
    pub status: String,
}

impl Task {
    /// Creates a new task from validated input, generating a fresh
    /// identifier.
    ///
    /// Identifier uniqueness rests on the collision probability of random
    /// UUIDs; no explicit uniqueness check is performed.
    #[must_use]
    pub fn create(input: &CreateTaskInput) -> Self {
        Self {
            task_id: TaskId::new(),
            task_name: input.task_name().to_owned(),
            assigned_to: input.assigned_to().to_owned(),
            start_date: input.start_date().to_owned(),
            end_date: input.end_date().to_owned(),
            status: input.status().to_owned(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTask) -> Self {
        Self {
            task_id: data.task_id,
            task_name: data.task_name,
            assigned_to: data.assigned_to,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the task name.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the start date string.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the end date string.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Applies an update to the four mutable attributes.
    ///
    /// The identifier and task name are left untouched.
    pub fn apply_update(&mut self, input: &UpdateTaskInput) {
        self.assigned_to = input.assigned_to().to_owned();
        self.start_date = input.start_date().to_owned();
        self.end_date = input.end_date().to_owned();
        self.status = input.status().to_owned();
    }
}
