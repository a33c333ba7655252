//! In-memory task store mirroring the backing table's item semantics.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CreateTaskInput, PersistedTask, Task, TaskId, UpdateTaskInput},
    ports::{TableProvisionError, TableProvisioner, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Stored item with attribute-level absence.
///
/// Non-key attributes are optional so that records materialised by an
/// update against an unknown identifier hold only the updated attributes,
/// matching the backing table's behaviour.
#[derive(Debug, Clone, Default)]
struct StoredItem {
    task_name: Option<String>,
    assigned_to: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    status: Option<String>,
}

impl StoredItem {
    fn to_task(&self, task_id: TaskId) -> Task {
        Task::from_persisted(PersistedTask {
            task_id,
            task_name: self.task_name.clone().unwrap_or_default(),
            assigned_to: self.assigned_to.clone().unwrap_or_default(),
            start_date: self.start_date.clone().unwrap_or_default(),
            end_date: self.end_date.clone().unwrap_or_default(),
            status: self.status.clone().unwrap_or_default(),
        })
    }
}

/// Thread-safe in-memory task store.
///
/// Serves as the test double for the table-backed store and as the
/// reference implementation of its operation semantics. Also implements
/// the provisioner port as a no-op, since there is no table to create.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    items: Arc<RwLock<HashMap<TaskId, StoredItem>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let items = self.items.read().map_err(lock_error)?;
        Ok(items
            .iter()
            .map(|(task_id, item)| item.to_task(*task_id))
            .collect())
    }

    async fn create_task(&self, input: CreateTaskInput) -> TaskStoreResult<Task> {
        let task = Task::create(&input);
        let item = StoredItem {
            task_name: Some(task.task_name().to_owned()),
            assigned_to: Some(task.assigned_to().to_owned()),
            start_date: Some(task.start_date().to_owned()),
            end_date: Some(task.end_date().to_owned()),
            status: Some(task.status().to_owned()),
        };
        let mut items = self.items.write().map_err(lock_error)?;
        items.insert(task.task_id(), item);
        Ok(task)
    }

    async fn get_task(&self, task_id: TaskId) -> TaskStoreResult<Option<Task>> {
        let items = self.items.read().map_err(lock_error)?;
        Ok(items.get(&task_id).map(|item| item.to_task(task_id)))
    }

    async fn update_task(&self, task_id: TaskId, input: UpdateTaskInput) -> TaskStoreResult<Task> {
        let mut items = self.items.write().map_err(lock_error)?;
        // Unconditional upsert: an unknown identifier materialises a
        // partial item, leaving the task name unset.
        let item = items.entry(task_id).or_default();
        item.assigned_to = Some(input.assigned_to().to_owned());
        item.start_date = Some(input.start_date().to_owned());
        item.end_date = Some(input.end_date().to_owned());
        item.status = Some(input.status().to_owned());
        Ok(item.to_task(task_id))
    }

    async fn delete_task(&self, task_id: TaskId) -> TaskStoreResult<()> {
        let mut items = self.items.write().map_err(lock_error)?;
        items.remove(&task_id);
        Ok(())
    }
}

#[async_trait]
impl TableProvisioner for InMemoryTaskStore {
    async fn ensure_table(&self) -> Result<(), TableProvisionError> {
        Ok(())
    }
}
