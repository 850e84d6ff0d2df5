//! Application error types

use thiserror::Error;

use spyglass_domain::DomainError;

use crate::loader::SpecLoadError;
use crate::ports::StoreError;

/// Application-level errors for composed use cases.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A specification could not be loaded.
    #[error(transparent)]
    Load(#[from] SpecLoadError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
