//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Connection import errors
//! - 2xx: Document (frontmatter) errors
//! - 3xx: Config errors
//! - 6xx: Storage/IO errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `ImportUnrecognized` -> E101).
/// Codes are grouped by category for easy identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Import errors (1xx)
    // ========================================
    /// E101: Pasted text matches no known command or JSON dialect
    ImportUnrecognized,
    /// E102: JSON parsed but contains no server configuration
    ImportNoServerConfig,
    /// E103: JSON payload could not be decoded
    ImportInvalidJson,
    /// E104: Recognized command prefix with malformed content
    ImportMalformedPayload,
    /// E105: Server definition lacks a command or URL
    ImportMissingField,

    // ========================================
    // Document errors (2xx)
    // ========================================
    /// E201: Frontmatter lacks a mandatory key
    DocumentMissingField,
    /// E202: Frontmatter present but body is empty
    DocumentEmptyBody,
    /// E203: Input contains nothing but whitespace
    InputEmpty,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file not found
    ConfigNotFound,
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E303: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Failed to read input or write output
    IoError,
    /// E602: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `ImportUnrecognized` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ImportUnrecognized => 101,
            Self::ImportNoServerConfig => 102,
            Self::ImportInvalidJson => 103,
            Self::ImportMalformedPayload => 104,
            Self::ImportMissingField => 105,

            Self::DocumentMissingField => 201,
            Self::DocumentEmptyBody => 202,
            Self::InputEmpty => 203,

            Self::ConfigNotFound => 301,
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 303,

            Self::IoError => 601,
            Self::SerializationError => 602,

            Self::InternalError => 901,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ImportUnrecognized => "Paste a `claude mcp add ...` command, a `claude mcp add-json ...` command, or a JSON object with an `mcpServers` map",
            Self::ImportNoServerConfig => "The JSON must contain `mcpServers`, `servers`, a single server object with `command`/`url`/`type`, or `{\"name\": {...}}`",
            Self::ImportInvalidJson => "Check the JSON for trailing commas, unquoted keys, or unbalanced braces",
            Self::ImportMalformedPayload => "Check the command syntax: `claude mcp add <name> [-e KEY=value] -- <command> [args...]`",
            Self::ImportMissingField => "Stdio servers need a `command`; sse/http servers need a `url`",
            Self::DocumentMissingField => "Add the missing key to the frontmatter block between the `---` lines",
            Self::DocumentEmptyBody => "Add instructions below the closing `---` line",
            Self::InputEmpty => "Provide some text to import",
            Self::ConfigNotFound => "Create the config file or pass --config with a valid path",
            Self::ConfigInvalid => "Fix the TOML syntax in the config file. Run `ccimport config` to inspect the effective settings",
            Self::ConfigMissingRequired => "Set the missing value in config.toml or via its CCIMPORT_* environment variable",
            Self::IoError => "Check that the file exists and is readable",
            Self::SerializationError => "The output could not be serialized; please report this issue",
            Self::InternalError => "This is a bug; please report it with the input that triggered it",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError | Self::InternalError)
    }

    /// Get the category of this error.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "import",
            2 => "document",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Get a URL to documentation for this error (if available).
    #[must_use]
    pub fn help_url(&self) -> Option<String> {
        Some(format!(
            "https://docs.ccimport.dev/errors/{}",
            self.code_string()
        ))
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::ImportUnrecognized,
            Self::ImportNoServerConfig,
            Self::ImportInvalidJson,
            Self::ImportMalformedPayload,
            Self::ImportMissingField,
            Self::DocumentMissingField,
            Self::DocumentEmptyBody,
            Self::InputEmpty,
            Self::ConfigNotFound,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::IoError,
            Self::SerializationError,
            Self::InternalError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
