//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required field is absent or blank.
    ///
    /// The field name uses the wire spelling (`taskName`, `assignedTo`,
    /// `startDate`, `endDate`, `status`).
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Error returned while parsing task identifiers from routes or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
