//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier in string form.
    pub task_id: String,
    /// Task name attribute, absent on partial records.
    pub task_name: Option<String>,
    /// Assignee attribute.
    pub assigned_to: Option<String>,
    /// Start date attribute.
    pub start_date: Option<String>,
    /// End date attribute.
    pub end_date: Option<String>,
    /// Status attribute.
    pub status: Option<String>,
}

/// Insert model for complete task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier in string form.
    pub task_id: String,
    /// Task name attribute.
    pub task_name: Option<String>,
    /// Assignee attribute.
    pub assigned_to: Option<String>,
    /// Start date attribute.
    pub start_date: Option<String>,
    /// End date attribute.
    pub end_date: Option<String>,
    /// Status attribute.
    pub status: Option<String>,
}
