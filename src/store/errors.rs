//! Store error types
//!
//! A duplicate name is the one constraint violation callers are expected to
//! classify; everything else here is an opaque storage failure that must
//! never be mistaken for a conflict or a missing record.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-name constraint violation on insert
    #[error("duplicate planet name: {0}")]
    DuplicateName(String),

    /// Journal I/O failure
    #[error("journal I/O failure: {0}")]
    Io(#[from] io::Error),

    /// Journal checksum or framing failure
    #[error("journal corruption at offset {offset}: {reason}")]
    Corruption { offset: u64, reason: String },

    /// Table lock poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Corruption error with byte offset context
    pub fn corruption_at_offset(offset: u64, reason: impl Into<String>) -> Self {
        Self::Corruption {
            offset,
            reason: reason.into(),
        }
    }

    /// Whether this error is the unique-name constraint violation.
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, StoreError::DuplicateName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_classification() {
        let err = StoreError::DuplicateName("Tatooine".to_string());
        assert!(err.is_duplicate_name());
        assert!(err.to_string().contains("Tatooine"));
    }

    #[test]
    fn test_corruption_mentions_offset() {
        let err = StoreError::corruption_at_offset(42, "checksum mismatch");
        assert!(!err.is_duplicate_name());
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("checksum"));
    }
}
