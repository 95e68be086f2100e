//! Error types and exit codes for notetree
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (filesystem, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data/store error (missing note, corrupt note, ambiguous reference)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing or corrupt notes (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notetree operations
#[derive(Error, Debug)]
pub enum NoteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("ambiguous reference '{reference}' (matches: {})", .candidates.join(", "))]
    AmbiguousReference {
        reference: String,
        candidates: Vec<String>,
    },

    #[error("corrupt note {path:?}: {reason}")]
    CorruptNote { path: PathBuf, reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("no free filename for '{stem}' after {attempts} attempts")]
    Collision { stem: String, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl NoteError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NoteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NoteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        NoteError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NoteError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a note file that does not follow the header layout
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        NoteError::CorruptNote {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for both note and folder lookups that did not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NoteError::NoteNotFound { .. } | NoteError::NotFound { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NoteError::UnknownFormat(_)
            | NoteError::UsageError(_)
            | NoteError::InvalidValue { .. } => ExitCode::Usage,

            NoteError::InvalidStore { .. }
            | NoteError::NoteNotFound { .. }
            | NoteError::NotFound { .. }
            | NoteError::AmbiguousReference { .. }
            | NoteError::CorruptNote { .. }
            | NoteError::AlreadyExists { .. } => ExitCode::Data,

            NoteError::Collision { .. }
            | NoteError::Io(_)
            | NoteError::Json(_)
            | NoteError::Toml(_)
            | NoteError::FailedOperationWithTarget { .. }
            | NoteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NoteError::UnknownFormat(_) => "unknown_format",
            NoteError::UsageError(_) => "usage_error",
            NoteError::InvalidValue { .. } => "invalid_value",
            NoteError::InvalidStore { .. } => "invalid_store",
            NoteError::NoteNotFound { .. } => "note_not_found",
            NoteError::NotFound { .. } => "not_found",
            NoteError::AmbiguousReference { .. } => "ambiguous_reference",
            NoteError::CorruptNote { .. } => "corrupt_note",
            NoteError::AlreadyExists { .. } => "already_exists",
            NoteError::Collision { .. } => "collision",
            NoteError::Io(_) => "io_error",
            NoteError::Json(_) => "json_error",
            NoteError::Toml(_) => "toml_error",
            NoteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NoteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let NoteError::AmbiguousReference { candidates, .. } = self {
            error_obj["candidates"] = serde_json::json!(candidates);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for notetree operations
pub type Result<T> = std::result::Result<T, NoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            NoteError::NoteNotFound {
                id: "x.md".to_string()
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            NoteError::invalid_value("tag", "a,b").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            NoteError::Collision {
                stem: "dup".to_string(),
                attempts: 3
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = NoteError::AmbiguousReference {
            reference: "alpha".to_string(),
            candidates: vec!["alpha.md".to_string(), "beta.md".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "ambiguous reference 'alpha' (matches: alpha.md, beta.md)"
        );

        let json = err.to_json();
        assert_eq!(json["error"]["type"], "ambiguous_reference");
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["candidates"][1], "beta.md");
    }

    #[test]
    fn test_is_not_found() {
        assert!(NoteError::not_found("folder", "archive").is_not_found());
        assert!(!NoteError::Other("boom".to_string()).is_not_found());
    }
}
