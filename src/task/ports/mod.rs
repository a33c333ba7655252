//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services
//! and implemented by the storage adapters.

pub mod provisioner;
pub mod store;

pub use provisioner::{TableProvisionError, TableProvisioner, provision_at_startup};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
