//! Error handling for ccimport.
//!
//! This module provides:
//! - [`ParseError`]: The typed failure returned by the import and document parsers
//! - [`ParseErrorKind`]: The coarse taxonomy UI callers branch on
//! - [`CcError`]: The crate-level error for CLI operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseErrorKind {
    /// Input matches no known dialect prefix or JSON shape.
    UnrecognizedFormat,
    /// A dialect was recognized but its payload failed to parse.
    MalformedEmbeddedPayload,
    /// A structurally valid input lacks a mandatory key or token.
    MissingRequiredField,
    /// Nothing usable remains after structural parsing.
    EmptyContent,
}

/// Failure of a single parse call.
///
/// Messages are stable and meant to be shown verbatim next to the paste or
/// import control.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unrecognized format: expected a `claude mcp add` command or a JSON MCP server configuration")]
    UnrecognizedFormat,

    #[error("No MCP server configuration found")]
    NoServerConfig,

    #[error("Invalid JSON in {context}: {source}")]
    InvalidJson {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {context}: {reason}")]
    MalformedPayload {
        context: &'static str,
        reason: String,
    },

    #[error("Server '{server}' is missing required field `{field}`")]
    MissingServerField { server: String, field: &'static str },

    #[error("Missing required frontmatter field `{field}`")]
    MissingField { field: &'static str },

    #[error("Content is empty")]
    EmptyContent,

    #[error("Document body is empty after the frontmatter block")]
    EmptyBody,
}

impl ParseError {
    pub(crate) fn malformed(context: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            context,
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_server_field(server: &str, field: &'static str) -> Self {
        Self::MissingServerField {
            server: server.to_string(),
            field,
        }
    }

    /// Classify this error into the four-kind taxonomy.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnrecognizedFormat | Self::NoServerConfig => ParseErrorKind::UnrecognizedFormat,
            Self::InvalidJson { .. } | Self::MalformedPayload { .. } => {
                ParseErrorKind::MalformedEmbeddedPayload
            }
            Self::MissingServerField { .. } | Self::MissingField { .. } => {
                ParseErrorKind::MissingRequiredField
            }
            Self::EmptyContent | Self::EmptyBody => ParseErrorKind::EmptyContent,
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnrecognizedFormat => ErrorCode::ImportUnrecognized,
            Self::NoServerConfig => ErrorCode::ImportNoServerConfig,
            Self::InvalidJson { .. } => ErrorCode::ImportInvalidJson,
            Self::MalformedPayload { .. } => ErrorCode::ImportMalformedPayload,
            Self::MissingServerField { .. } => ErrorCode::ImportMissingField,
            Self::MissingField { .. } => ErrorCode::DocumentMissingField,
            Self::EmptyContent => ErrorCode::InputEmpty,
            Self::EmptyBody => ErrorCode::DocumentEmptyBody,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::InvalidJson { context, source } => Some(serde_json::json!({
                "payload": context,
                "line": source.line(),
                "column": source.column(),
            })),
            Self::MalformedPayload { context, reason } => {
                Some(serde_json::json!({ "payload": context, "reason": reason }))
            }
            Self::MissingServerField { server, field } => {
                Some(serde_json::json!({ "server": server, "field": field }))
            }
            Self::MissingField { field } => Some(serde_json::json!({ "field": field })),
            _ => None,
        }
    }
}

/// Main error type for ccimport operations.
#[derive(Error, Debug)]
pub enum CcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Missing required config: {0}")]
    MissingConfig(String),
}

impl CcError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(err) => err.code(),
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::ConfigNotFound(_) => ErrorCode::ConfigNotFound,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Parse(err) => err.context(),
            Self::ConfigNotFound(path) => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_cc_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "IMPORT_UNRECOGNIZED")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Coarse parse taxonomy, present only for parse failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ParseErrorKind>,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// URL to documentation about this error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,

    /// Error category (e.g., "import", "document", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            kind: None,
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            help_url: code.help_url(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`CcError`].
    #[must_use]
    pub fn from_cc_error(err: &CcError) -> Self {
        let code = err.code();
        let context = err.context();
        let kind = match err {
            CcError::Parse(parse) => Some(parse.kind()),
            _ => None,
        };

        Self {
            code,
            numeric_code: code.numeric(),
            kind,
            message: err.to_string(),
            suggestion: suggest_for_error(code, context.as_ref()),
            context,
            recoverable: code.is_recoverable(),
            help_url: code.help_url(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<CcError> for StructuredError {
    fn from(err: CcError) -> Self {
        Self::from_cc_error(&err)
    }
}

impl From<&CcError> for StructuredError {
    fn from(err: &CcError) -> Self {
        Self::from_cc_error(err)
    }
}

/// Result type alias using [`CcError`].
pub type Result<T> = std::result::Result<T, CcError>;
