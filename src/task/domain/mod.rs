//! Domain model for task records.
//!
//! The domain covers the single persisted entity, its generated identifier,
//! and the typed per-operation inputs validated at the boundary between the
//! presentation layer and the store. All infrastructure concerns stay
//! outside the domain boundary.

mod error;
mod ids;
mod input;
mod task;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use input::{CreateTaskInput, UpdateTaskInput};
pub use task::{PersistedTask, Task};
