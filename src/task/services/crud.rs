//! Service layer between the presentation adapter and the task store.
//!
//! The presentation adapter hands raw form fields to this service; the
//! service converts them into the typed per-operation inputs (performing
//! the presence validation the store deliberately omits) and invokes
//! exactly one store operation per request.

use crate::task::{
    domain::{CreateTaskInput, Task, TaskDomainError, TaskId, UpdateTaskInput},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from raw form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    task_name: String,
    assigned_to: String,
    start_date: String,
    end_date: String,
    status: String,
}

impl CreateTaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        task_name: impl Into<String>,
        assigned_to: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            assigned_to: assigned_to.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            status: status.into(),
        }
    }
}

/// Request payload for updating the mutable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    assigned_to: String,
    start_date: String,
    end_date: String,
    status: String,
}

impl UpdateTaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        assigned_to: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            assigned_to: assigned_to.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            status: status.into(),
        }
    }
}

/// Service-level errors for task CRUD operations.
///
/// The presentation adapter maps either variant to a generic failure page
/// and logs the underlying cause; internal detail is never shown to the
/// end user.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Boundary validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
///
/// Holds the injected store handle; the service itself keeps no state
/// between requests.
#[derive(Clone)]
pub struct TaskService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> TaskService<S>
where
    S: TaskStore,
{
    /// Creates a new task service around a shared store handle.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Enumerates every task for the list view.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the table is unreachable.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.list_tasks().await?)
    }

    /// Creates a task from raw form fields, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a required field is blank
    /// and [`TaskServiceError::Store`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let input = CreateTaskInput::new(
            request.task_name,
            request.assigned_to,
            request.start_date,
            request.end_date,
            request.status,
        )?;
        Ok(self.store.create_task(input).await?)
    }

    /// Fetches a task for the edit and delete-confirmation views.
    ///
    /// Returns `Ok(None)` for an unknown identifier; the caller renders an
    /// absent-task state rather than treating it as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the lookup fails.
    pub async fn get_task(&self, task_id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.store.get_task(task_id).await?)
    }

    /// Updates the four mutable fields of a task from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a required field is blank
    /// and [`TaskServiceError::Store`] when persistence fails.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let input = UpdateTaskInput::new(
            request.assigned_to,
            request.start_date,
            request.end_date,
            request.status,
        )?;
        Ok(self.store.update_task(task_id, input).await?)
    }

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the delete fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskServiceResult<()> {
        Ok(self.store.delete_task(task_id).await?)
    }
}
