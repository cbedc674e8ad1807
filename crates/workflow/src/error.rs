use thiserror::Error;

use shopkeep_store::StoreError;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Workflow-level error.
///
/// `NotFound` is the recoverable "id does not resolve" case (a 404 at the
/// edge); `Store` is a persistence failure and fatal for the request.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
