//! Startup provisioning for the backing task table.

use super::store::TaskPgPool;
use crate::task::ports::{TableProvisionError, TableProvisioner};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Bool;

/// Existence probe against the information schema.
const TABLE_EXISTS_SQL: &str = concat!(
    "SELECT EXISTS (",
    "SELECT 1 FROM information_schema.tables ",
    "WHERE table_schema = current_schema() AND table_name = 'tasks'",
    ") AS present",
);

/// Creation statement for the task table: a single string key attribute
/// plus nullable attribute columns.
const CREATE_TABLE_SQL: &str = concat!(
    "CREATE TABLE tasks (",
    "task_id VARCHAR PRIMARY KEY, ",
    "task_name VARCHAR, ",
    "assigned_to VARCHAR, ",
    "start_date VARCHAR, ",
    "end_date VARCHAR, ",
    "status VARCHAR)",
);

#[derive(QueryableByName)]
struct TableProbe {
    #[diesel(sql_type = Bool)]
    present: bool,
}

/// `PostgreSQL` implementation of the table provisioner.
#[derive(Debug, Clone)]
pub struct PostgresTableProvisioner {
    pool: TaskPgPool,
}

impl PostgresTableProvisioner {
    /// Creates a provisioner sharing the process-wide connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableProvisioner for PostgresTableProvisioner {
    async fn ensure_table(&self) -> Result<(), TableProvisionError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TableProvisionError::check)?;
            ensure_table_blocking(&mut connection)
        })
        .await
        .map_err(TableProvisionError::check)?
    }
}

fn ensure_table_blocking(connection: &mut PgConnection) -> Result<(), TableProvisionError> {
    let probe = diesel::sql_query(TABLE_EXISTS_SQL)
        .get_result::<TableProbe>(connection)
        .map_err(TableProvisionError::check)?;

    if probe.present {
        tracing::info!("table 'Tasks' already exists");
        return Ok(());
    }

    tracing::info!("table 'Tasks' does not exist; creating it");
    // A concurrent creator makes this fail; the backing store's
    // create-fails-if-exists semantics are the only race handling.
    diesel::sql_query(CREATE_TABLE_SQL)
        .execute(connection)
        .map_err(TableProvisionError::create)?;
    tracing::info!("table 'Tasks' created");
    Ok(())
}
