//! `PostgreSQL` adapters for the backing task table.

mod models;
mod provisioner;
mod schema;
mod store;

pub use provisioner::PostgresTableProvisioner;
pub use store::{PostgresTaskStore, TaskPgPool};

use crate::config::StoreConfig;
use crate::task::ports::TaskStoreError;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// Builds the shared connection pool for the configured endpoint.
///
/// The pool is the process-wide client handle: created once at startup and
/// cloned into the store and provisioner. No pooling logic is added beyond
/// what the pool itself provides.
///
/// # Errors
///
/// Returns [`TaskStoreError::Backend`] when the pool cannot be built.
pub fn connect(config: &StoreConfig) -> Result<TaskPgPool, TaskStoreError> {
    let manager = ConnectionManager::<PgConnection>::new(config.endpoint());
    Pool::builder()
        .build(manager)
        .map_err(TaskStoreError::backend)
}
