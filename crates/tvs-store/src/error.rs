/// Errors from store operations.
///
/// Absence of data is not an error: a `get` miss returns `None` and an
/// empty search returns an empty list. These variants are genuine
/// operation failures, and none of them leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Upload of a name that is still present, live or expired.
    #[error("file {0} already exists")]
    DuplicateName(String),

    /// Copy from a name no surviving entry carries.
    #[error("source file {0} does not exist")]
    SourceNotFound(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
