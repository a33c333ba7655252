//! Store port for task record CRUD.

use crate::task::domain::{CreateTaskInput, Task, TaskId, UpdateTaskInput};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Each operation is a single round trip to the backing table; the store
/// holds no state of its own, never retries, and surfaces every failure
/// immediately to the caller.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Enumerates every record in the table.
    ///
    /// The result is unordered and unpaginated (a single unbounded scan).
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the table is unreachable.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Generates a fresh identifier and writes a complete new record.
    ///
    /// Returns the stored task, including its generated identifier. No
    /// uniqueness probe precedes the write; collision probability of random
    /// identifiers is treated as negligible.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the table is unreachable.
    async fn create_task(&self, input: CreateTaskInput) -> TaskStoreResult<Task>;

    /// Point lookup by identifier.
    ///
    /// An absent item is a normal `None` result, not an error; callers must
    /// branch on it explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the table is unreachable.
    async fn get_task(&self, task_id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Unconditional partial update of the four mutable attributes.
    ///
    /// `task_id` and the task name are never modified. There is no
    /// existence precondition: updating an unknown identifier materialises
    /// a record holding only the updated attributes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the table is unreachable.
    async fn update_task(&self, task_id: TaskId, input: UpdateTaskInput) -> TaskStoreResult<Task>;

    /// Unconditional delete by identifier.
    ///
    /// Deleting an unknown identifier is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the table is unreachable.
    async fn delete_task(&self, task_id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Failure to reach or execute against the backing table.
    #[error("store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
