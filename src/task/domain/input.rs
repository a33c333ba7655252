//! Typed per-operation inputs validated at the store boundary.
//!
//! The store itself performs no field validation; presence checks happen
//! here, when the presentation layer's raw form fields are converted into
//! these inputs. Validation goes no further than presence: dates and names
//! are carried as opaque strings.

use super::TaskDomainError;

/// Checks a required field for presence, returning it unchanged.
fn required(name: &'static str, value: String) -> Result<String, TaskDomainError> {
    if value.trim().is_empty() {
        return Err(TaskDomainError::MissingField(name));
    }
    Ok(value)
}

/// Validated input for the create operation.
///
/// Carries every attribute of a new task except the identifier, which the
/// store generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    task_name: String,
    assigned_to: String,
    start_date: String,
    end_date: String,
    status: String,
}

impl CreateTaskInput {
    /// Creates a validated input from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when any field is absent
    /// or blank.
    pub fn new(
        task_name: impl Into<String>,
        assigned_to: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        status: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            task_name: required("taskName", task_name.into())?,
            assigned_to: required("assignedTo", assigned_to.into())?,
            start_date: required("startDate", start_date.into())?,
            end_date: required("endDate", end_date.into())?,
            status: required("status", status.into())?,
        })
    }

    /// Returns the task name, fixed at creation.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the start date string.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the end date string.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Validated input for the update operation.
///
/// Covers only the four mutable attributes; `task_id` and `taskName` are
/// immutable after creation and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskInput {
    assigned_to: String,
    start_date: String,
    end_date: String,
    status: String,
}

impl UpdateTaskInput {
    /// Creates a validated input from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when any field is absent
    /// or blank.
    pub fn new(
        assigned_to: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        status: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            assigned_to: required("assignedTo", assigned_to.into())?,
            start_date: required("startDate", start_date.into())?,
            end_date: required("endDate", end_date.into())?,
            status: required("status", status.into())?,
        })
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the start date string.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the end date string.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}
