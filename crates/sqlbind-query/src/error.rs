//! Engine errors

use thiserror::Error;

use crate::parameters::ExpandError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by [`QueryEngine`](crate::QueryEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Named-placeholder rewriting failed; nothing reached the database.
    #[error(transparent)]
    Expand(#[from] ExpandError),

    /// The execution collaborator reported a failure.
    #[error("query execution failed: {0}")]
    Execute(#[from] sqlbind_core::SqlbindError),
}
