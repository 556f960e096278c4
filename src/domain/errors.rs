//! Service error taxonomy
//!
//! Three terminal outcomes: a duplicate-name conflict on create, a missing
//! lookup/delete target, and an opaque store failure. None is retried; the
//! opaque case must never be collapsed into conflict or not-found.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A planet with this name already exists
    #[error("planet name already exists: {0}")]
    Conflict(String),

    /// The requested planet does not exist
    #[error("planet not found")]
    NotFound,

    /// Unclassified store failure
    #[error(transparent)]
    Store(StoreError),
}
