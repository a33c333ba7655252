//! Provisioner port for the backing task table.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Table provisioning contract.
///
/// `ensure_table` is idempotent and invoked once per process lifetime,
/// before any store operation runs.
#[async_trait]
pub trait TableProvisioner: Send + Sync {
    /// Ensures the task table exists with its single string key attribute.
    ///
    /// A table that already exists is a no-op. Concurrent creation races
    /// are left to the backing store's create semantics, which fail when
    /// the table already exists.
    ///
    /// # Errors
    ///
    /// Returns [`TableProvisionError::Check`] when the existence check
    /// fails for a reason other than the table being absent, and
    /// [`TableProvisionError::Create`] when creation fails.
    async fn ensure_table(&self) -> Result<(), TableProvisionError>;
}

/// Errors raised during startup provisioning.
#[derive(Debug, Clone, Error)]
pub enum TableProvisionError {
    /// The table existence check failed.
    #[error("table existence check failed: {0}")]
    Check(Arc<dyn std::error::Error + Send + Sync>),

    /// Creating the table failed.
    #[error("table creation failed: {0}")]
    Create(Arc<dyn std::error::Error + Send + Sync>),
}

impl TableProvisionError {
    /// Wraps an existence-check failure.
    pub fn check(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Check(Arc::new(err))
    }

    /// Wraps a creation failure.
    pub fn create(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Create(Arc::new(err))
    }
}

/// Runs startup provisioning, treating any failure as non-fatal.
///
/// Provisioning errors are logged and swallowed; the process continues to
/// serve requests, which then fail at the store layer if the table truly
/// does not exist.
pub async fn provision_at_startup(provisioner: &impl TableProvisioner) {
    if let Err(err) = provisioner.ensure_table().await {
        tracing::error!(error = %err, "table provisioning failed; continuing");
    }
}
