//! `PostgreSQL` task store implementation.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{CreateTaskInput, PersistedTask, Task, TaskId, UpdateTaskInput},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::backend)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::backend)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::backend)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn create_task(&self, input: CreateTaskInput) -> TaskStoreResult<Task> {
        let task = Task::create(&input);
        let new_row = to_new_row(&task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskStoreError::backend)?;
            Ok(())
        })
        .await?;

        Ok(task)
    }

    async fn get_task(&self, task_id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::task_id.eq(task_id.to_string()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::backend)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update_task(&self, task_id: TaskId, input: UpdateTaskInput) -> TaskStoreResult<Task> {
        self.run_blocking(move |connection| {
            // Unconditional upsert touching only the four mutable columns:
            // an unknown identifier materialises a partial record whose
            // task_name stays NULL.
            let row = diesel::insert_into(tasks::table)
                .values((
                    tasks::task_id.eq(task_id.to_string()),
                    tasks::assigned_to.eq(Some(input.assigned_to().to_owned())),
                    tasks::start_date.eq(Some(input.start_date().to_owned())),
                    tasks::end_date.eq(Some(input.end_date().to_owned())),
                    tasks::status.eq(Some(input.status().to_owned())),
                ))
                .on_conflict(tasks::task_id)
                .do_update()
                .set((
                    tasks::assigned_to.eq(Some(input.assigned_to().to_owned())),
                    tasks::start_date.eq(Some(input.start_date().to_owned())),
                    tasks::end_date.eq(Some(input.end_date().to_owned())),
                    tasks::status.eq(Some(input.status().to_owned())),
                ))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskStoreError::backend)?;
            row_to_task(row)
        })
        .await
    }

    async fn delete_task(&self, task_id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            // Affected-row count is ignored: deleting an unknown identifier
            // is not an error.
            diesel::delete(tasks::table.filter(tasks::task_id.eq(task_id.to_string())))
                .execute(connection)
                .map_err(TaskStoreError::backend)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        task_id: task.task_id().to_string(),
        task_name: Some(task.task_name().to_owned()),
        assigned_to: Some(task.assigned_to().to_owned()),
        start_date: Some(task.start_date().to_owned()),
        end_date: Some(task.end_date().to_owned()),
        status: Some(task.status().to_owned()),
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        task_id: raw_task_id,
        task_name,
        assigned_to,
        start_date,
        end_date,
        status,
    } = row;

    let task_id = TaskId::parse(&raw_task_id).map_err(TaskStoreError::backend)?;

    Ok(Task::from_persisted(PersistedTask {
        task_id,
        task_name: task_name.unwrap_or_default(),
        assigned_to: assigned_to.unwrap_or_default(),
        start_date: start_date.unwrap_or_default(),
        end_date: end_date.unwrap_or_default(),
        status: status.unwrap_or_default(),
    }))
}
