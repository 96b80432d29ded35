//! Error types and exit codes for rubric tooling
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad configuration values)
//! - 3: Data error (unreadable or malformed rubric files)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for shells built on the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed rubric or report input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while decoding, scoring, encoding or writing rubrics
#[derive(Error, Debug)]
pub enum RubricError {
    // Data errors (exit code 3)
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error(
        "unsupported child <{node}> under <{parent}> in {path:?} (supported: {})",
        .supported.join(", ")
    )]
    UnsupportedElement {
        path: PathBuf,
        parent: String,
        node: String,
        supported: Vec<String>,
    },

    // Generic failures (exit code 1)
    #[error("failed to encode rubric for {target}: {reason}")]
    Encode { target: String, reason: String },

    #[error("failed to write {path:?}: {reason} (the file may be partially written)")]
    Write { path: PathBuf, reason: String },

    #[error("failed to sanitize permissions of {path:?}: {reason}")]
    PermissionSanitize { path: PathBuf, reason: String },

    #[error("rubric session already open: {key}")]
    AlreadyOpen { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Usage errors (exit code 2)
    #[error("usage error: {0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RubricError {
    /// Create a decode error for a document at `path`
    pub fn decode(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RubricError::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a child element the grammar does not allow
    pub fn unsupported_element(
        path: impl Into<PathBuf>,
        parent: &str,
        node: &str,
        supported: &[&str],
    ) -> Self {
        RubricError::UnsupportedElement {
            path: path.into(),
            parent: parent.to_string(),
            node: node.to_string(),
            supported: supported.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an encode error for an output target
    pub fn encode(target: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        RubricError::Encode {
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a write error for a destination path
    pub fn write(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RubricError::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RubricError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RubricError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Whether the error leaves the written content intact
    pub fn is_non_fatal(&self) -> bool {
        matches!(self, RubricError::PermissionSanitize { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RubricError::UsageError(_)
            | RubricError::InvalidValue { .. }
            | RubricError::Unsupported { .. } => ExitCode::Usage,

            RubricError::Decode { .. }
            | RubricError::UnsupportedElement { .. }
            | RubricError::Toml(_) => ExitCode::Data,

            RubricError::Encode { .. }
            | RubricError::Write { .. }
            | RubricError::PermissionSanitize { .. }
            | RubricError::AlreadyOpen { .. }
            | RubricError::Io(_)
            | RubricError::Json(_)
            | RubricError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RubricError::Decode { .. } => "decode_error",
            RubricError::UnsupportedElement { .. } => "unsupported_element",
            RubricError::Encode { .. } => "encode_error",
            RubricError::Write { .. } => "write_error",
            RubricError::PermissionSanitize { .. } => "permission_sanitize_error",
            RubricError::AlreadyOpen { .. } => "already_open",
            RubricError::Io(_) => "io_error",
            RubricError::Json(_) => "json_error",
            RubricError::Toml(_) => "toml_error",
            RubricError::UsageError(_) => "usage_error",
            RubricError::InvalidValue { .. } => "invalid_value",
            RubricError::Unsupported { .. } => "unsupported",
            RubricError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            RubricError::Decode { path, .. }
            | RubricError::Write { path, .. }
            | RubricError::PermissionSanitize { path, .. } => {
                error_obj["path"] = serde_json::json!(path.display().to_string());
            }
            RubricError::UnsupportedElement {
                path,
                parent,
                node,
                supported,
            } => {
                error_obj["path"] = serde_json::json!(path.display().to_string());
                error_obj["parent"] = serde_json::json!(parent);
                error_obj["node"] = serde_json::json!(node);
                error_obj["supported"] = serde_json::json!(supported);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for rubric operations
pub type Result<T> = std::result::Result<T, RubricError>;
