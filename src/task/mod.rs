//! Task record persistence for Taskboard.
//!
//! This module implements the two persistence components of the system: the
//! table provisioner, which idempotently ensures the `tasks` table exists
//! with its single string key before any operation runs, and the task
//! store, which exposes full enumeration, creation with generated
//! identifiers, point lookup, partial update, and unconditional delete.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Route-facing orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
