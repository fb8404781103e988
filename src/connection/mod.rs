//! Connection-descriptor importer.
//!
//! Turns pasted text into normalized MCP server descriptors. Accepted inputs:
//!
//! - `claude mcp add-json <name> '<json>'`
//! - `claude mcp add <name> [-e KEY=value]... [--] <command> [args...]`
//!   (and the remote form `--transport sse|http <name> <url>`)
//! - JSON: an `mcpServers` map, a `servers` map, a single inline server
//!   object, or `{ "<name>": { ... } }`
//!
//! Backslash line continuations are joined before anything else, so every
//! dialect may span several physical lines.

mod json;
mod shell;
mod types;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParseError;

pub use json::{normalize_server_config, parse_json_config, JsonShape};
pub use shell::normalize_continuations;
pub use types::{to_mcp_servers_json, ConnectionDescriptor, Endpoint, StringMap, Transport};

/// Name given to a server pasted as a bare inline JSON object.
pub const DEFAULT_FALLBACK_NAME: &str = "imported-mcp";

/// Input syntax recognized by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// `claude mcp add-json <name> <json>`
    ShellAddJson,
    /// `claude mcp add <name> ... -- <command>`
    ShellAdd,
    /// A JSON document in one of the [`JsonShape`] layouts
    Json,
}

impl Dialect {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShellAddJson => "shell-add-json",
            Self::ShellAdd => "shell-add",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs for [`Importer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Name used for a bare inline JSON server object.
    pub fallback_name: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }
}

/// Result of a detailed import: what was recognized and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub dialect: Dialect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<JsonShape>,
    pub servers: Vec<ConnectionDescriptor>,
}

/// Stateless importer configured with [`ImportOptions`].
#[derive(Debug, Clone, Default)]
pub struct Importer {
    options: ImportOptions,
}

impl Importer {
    #[must_use]
    pub const fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Parse pasted text into one or more descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the text matches no dialect, or when a
    /// recognized dialect carries a malformed or incomplete payload.
    pub fn parse(&self, input: &str) -> Result<Vec<ConnectionDescriptor>, ParseError> {
        self.parse_detailed(input).map(|import| import.servers)
    }

    /// Like [`Importer::parse`], also reporting the dialect and JSON shape.
    ///
    /// # Errors
    ///
    /// Same as [`Importer::parse`].
    pub fn parse_detailed(&self, input: &str) -> Result<Import, ParseError> {
        let text = normalize_continuations(input.trim());
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyContent);
        }

        if let Some(rest) = shell::strip_add_json_prefix(text) {
            debug!(dialect = Dialect::ShellAddJson.as_str(), "detected dialect");
            let server = shell::parse_add_json(rest)?;
            return Ok(Import {
                dialect: Dialect::ShellAddJson,
                shape: None,
                servers: vec![server],
            });
        }

        if let Some(rest) = shell::strip_add_prefix(text) {
            debug!(dialect = Dialect::ShellAdd.as_str(), "detected dialect");
            let server = shell::parse_add(rest)?;
            return Ok(Import {
                dialect: Dialect::ShellAdd,
                shape: None,
                servers: vec![server],
            });
        }

        if looks_like_json(text) {
            debug!(dialect = Dialect::Json.as_str(), "detected dialect");
            let (shape, servers) = parse_json_config(text, &self.options.fallback_name)?;
            return Ok(Import {
                dialect: Dialect::Json,
                shape: Some(shape),
                servers,
            });
        }

        Err(ParseError::UnrecognizedFormat)
    }
}

/// Parse pasted text with default options.
///
/// # Errors
///
/// See [`Importer::parse`].
pub fn parse_connection_text(input: &str) -> Result<Vec<ConnectionDescriptor>, ParseError> {
    Importer::default().parse(input)
}

/// Report which dialect the importer would use for `input`, without parsing
/// the payload.
#[must_use]
pub fn detect_dialect(input: &str) -> Option<Dialect> {
    let text = normalize_continuations(input.trim());
    let text = text.trim();
    if shell::strip_add_json_prefix(text).is_some() {
        Some(Dialect::ShellAddJson)
    } else if shell::strip_add_prefix(text).is_some() {
        Some(Dialect::ShellAdd)
    } else if looks_like_json(text) {
        Some(Dialect::Json)
    } else {
        None
    }
}

fn looks_like_json(text: &str) -> bool {
    text.starts_with('{') || text.starts_with('[')
}
