//! In-memory adapter for task persistence.

mod store;

pub use store::InMemoryTaskStore;
