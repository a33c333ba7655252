//! Route-facing services for task record CRUD.

mod crud;

pub use crud::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
