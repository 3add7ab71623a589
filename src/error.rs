//! Defines the crate level error type.

use crate::database_id::DatabaseId;

/// The errors that may occur while talking to a data source.
///
/// The aggregation functions themselves are total and never produce errors;
/// everything here originates at the persistence seam.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No record with the given ID exists in the data source.
    ///
    /// Returned by update and delete operations whose target is missing.
    #[error("no record with ID {0} could be found")]
    NotFound(DatabaseId),

    /// The data source failed or rejected a read or write.
    ///
    /// The string carries the adapter's own description of what went wrong.
    /// It is meant for logs, not for end users.
    #[error("the data source failed: {0}")]
    DataSource(String),
}
