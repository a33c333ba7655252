//! Taskboard: task-tracking record manager.
//!
//! This crate provides the persistence core of a small task tracker: it
//! provisions the backing `tasks` table on process start and exposes the
//! CRUD operations an HTTP presentation layer renders as HTML pages. The
//! presentation layer itself (routing, templates, static files) lives
//! outside this crate and consumes the service surface defined here.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record types and typed operation inputs
//! - **Ports**: Abstract trait interfaces for provisioning and storage
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Backing-store configuration resolved once at startup
//! - [`task`]: Table provisioning and task record CRUD

pub mod config;
pub mod task;
