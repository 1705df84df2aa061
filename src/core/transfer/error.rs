//! Error types for transfer equivalency lookups.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while looking up transfer equivalencies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The query is missing required fields
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// The interpreter or script could not be found
    #[error("Lookup program not found: {program}")]
    ProcessNotFound { program: String },

    /// The process could not be started or its output could not be read
    #[error("Failed to run lookup: {message}")]
    Spawn { message: String },

    /// The process exited unsuccessfully without a usable error payload
    #[error("Lookup exited with status {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    /// Stdout was not the expected JSON shape
    #[error("Malformed lookup output: {message}")]
    MalformedOutput { message: String },

    /// The process did not finish in time and was killed
    #[error("Lookup timed out after {after:?}")]
    Timeout { after: Duration },

    /// The script reported an error payload
    #[error("Lookup failed: {message}")]
    Script { message: String },
}

impl LookupError {
    /// Returns true if this error is potentially transient and retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::NonZeroExit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(LookupError::Timeout {
            after: Duration::from_secs(5)
        }.is_retryable());
        assert!(LookupError::NonZeroExit {
            code: Some(1),
            stderr: String::new()
        }
        .is_retryable());
        assert!(!LookupError::InvalidQuery {
            message: "x".to_string()
        }
        .is_retryable());
        assert!(!LookupError::Script {
            message: "x".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_display() {
        let err = LookupError::Timeout {
            after: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "Lookup timed out after 30s");

        let err = LookupError::Timeout {
            after: Duration::from_millis(250),
        };
        assert_eq!(err.to_string(), "Lookup timed out after 250ms");
    }
}
