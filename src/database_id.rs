//! Database ID type definition.

/// Alias for the integer type used for mapping to database IDs.
///
/// The external data source owns ID assignment; the core only carries IDs
/// around and compares them.
pub type DatabaseId = i64;
