//! Diesel schema for the backing task table.
//!
//! The table is treated as a key-value item store: a single string key and
//! nullable attribute columns, so records materialised by an update against
//! an unknown identifier can hold only the updated attributes.

diesel::table! {
    /// Task records keyed by their generated string identifier.
    tasks (task_id) {
        /// Task identifier, the table's single key attribute.
        task_id -> Varchar,
        /// Task name, fixed at creation.
        task_name -> Nullable<Varchar>,
        /// Assignee.
        assigned_to -> Nullable<Varchar>,
        /// Start date string.
        start_date -> Nullable<Varchar>,
        /// End date string.
        end_date -> Nullable<Varchar>,
        /// Status.
        status -> Nullable<Varchar>,
    }
}
