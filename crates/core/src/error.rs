use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The persistence boundary rejected a bulk import. The message is
    /// already prefixed for display to the operator.
    #[error("{0}")]
    ImportFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
