//! Unified error type surfaced by the runtime.
//!
//! Wraps engine, repository and content failures so callers can bubble them
//! up with consistent context.
use gene_core::{ErrorSeverity, GeneError, SequenceError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("no saved sequence in slot '{slot}'")]
    SlotNotFound { slot: String },
}

impl GeneError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Sequence(err) => err.severity(),
            RuntimeError::Repository(RepositoryError::InvalidSlot(_))
            | RuntimeError::SlotNotFound { .. } => ErrorSeverity::Validation,
            RuntimeError::Repository(_) => ErrorSeverity::Internal,
            RuntimeError::Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Sequence(err) => err.error_code(),
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
            RuntimeError::Content(_) => "RUNTIME_CONTENT",
            RuntimeError::SlotNotFound { .. } => "RUNTIME_SLOT_NOT_FOUND",
        }
    }
}
