//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Already initialized
    AlreadyInitialized,
    /// Not initialized
    NotInitialized,
    /// Boot failed
    BootFailed,
    /// I/O error
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "PLANETD_CLI_ALREADY_INITIALIZED",
            Self::NotInitialized => "PLANETD_CLI_NOT_INITIALIZED",
            Self::BootFailed => "PLANETD_CLI_BOOT_FAILED",
            Self::IoError => "PLANETD_CLI_IO_ERROR",
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Already initialized
    pub fn already_initialized() -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            "Data directory already initialized",
        )
    }

    /// Not initialized
    pub fn not_initialized() -> Self {
        Self::new(
            CliErrorCode::NotInitialized,
            "Data directory not initialized. Run 'planetd init' first.",
        )
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code() {
        let err = CliError::not_initialized();
        assert!(err.to_string().contains("PLANETD_CLI_NOT_INITIALIZED"));
        assert_eq!(err.code(), CliErrorCode::NotInitialized);
    }
}
