//! JSON dialects: shape matching and the shared server-config normalizer.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::types::{ConnectionDescriptor, Endpoint, StringMap, Transport};
use crate::error::ParseError;

/// JSON layouts the importer recognizes, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonShape {
    /// `{ "mcpServers": { "<name>": {...} } }`
    McpServers,
    /// `{ "servers": { "<name>": {...} } }`
    Servers,
    /// A bare server object with `command`, `url`, or `type`.
    Inline,
    /// `{ "<name>": {...} }` with exactly one key.
    NamedSingle,
}

impl JsonShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::McpServers => "mcpServers",
            Self::Servers => "servers",
            Self::Inline => "inline",
            Self::NamedSingle => "named-single",
        }
    }
}

type Entries<'a> = Vec<(String, &'a Value)>;
type ShapeMatcher = for<'a> fn(&'a Value, &str) -> Option<Entries<'a>>;

const SHAPE_CHAIN: [(JsonShape, ShapeMatcher); 4] = [
    (JsonShape::McpServers, match_mcp_servers),
    (JsonShape::Servers, match_servers),
    (JsonShape::Inline, match_inline),
    (JsonShape::NamedSingle, match_named_single),
];

/// Parse a JSON server configuration in any of the recognized shapes.
///
/// `fallback_name` names a server given as a bare inline object.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] when the text is not JSON,
/// [`ParseError::NoServerConfig`] when no shape matches, and the normalizer's
/// errors for a matched entry that cannot be normalized.
pub fn parse_json_config(
    text: &str,
    fallback_name: &str,
) -> Result<(JsonShape, Vec<ConnectionDescriptor>), ParseError> {
    let root: Value = serde_json::from_str(text).map_err(|source| ParseError::InvalidJson {
        context: "JSON configuration",
        source,
    })?;

    let (shape, entries) = match_shape(&root, fallback_name).ok_or(ParseError::NoServerConfig)?;
    debug!(shape = shape.as_str(), servers = entries.len(), "matched JSON shape");

    let descriptors = entries
        .into_iter()
        .map(|(name, config)| normalize_entry(&name, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((shape, descriptors))
}

/// Try each shape in priority order; first match wins.
fn match_shape<'a>(root: &'a Value, fallback_name: &str) -> Option<(JsonShape, Entries<'a>)> {
    SHAPE_CHAIN.iter().find_map(|(shape, matcher)| {
        let entries = matcher(root, fallback_name)?;
        Some((*shape, entries))
    })
}

fn match_mcp_servers<'a>(root: &'a Value, _fallback_name: &str) -> Option<Entries<'a>> {
    match_server_map(root, "mcpServers")
}

fn match_servers<'a>(root: &'a Value, _fallback_name: &str) -> Option<Entries<'a>> {
    match_server_map(root, "servers")
}

fn match_server_map<'a>(root: &'a Value, key: &str) -> Option<Entries<'a>> {
    let servers = root.get(key)?.as_object()?;
    if servers.is_empty() {
        return None;
    }
    Some(
        servers
            .iter()
            .map(|(name, config)| (name.clone(), config))
            .collect(),
    )
}

fn match_inline<'a>(root: &'a Value, fallback_name: &str) -> Option<Entries<'a>> {
    let config = root.as_object()?;
    is_config_shaped(config).then(|| vec![(fallback_name.to_string(), root)])
}

fn match_named_single<'a>(root: &'a Value, _fallback_name: &str) -> Option<Entries<'a>> {
    let object = root.as_object()?;
    if object.len() != 1 {
        return None;
    }
    let (name, config) = object.iter().next()?;
    is_config_shaped(config.as_object()?).then(|| vec![(name.clone(), config)])
}

/// A server object names how to reach it: a command, a URL, or a type.
fn is_config_shaped(config: &Map<String, Value>) -> bool {
    config
        .get("command")
        .is_some_and(|command| command.is_string() || command.is_array())
        || config.get("url").is_some_and(Value::is_string)
        || config.get("type").is_some_and(Value::is_string)
}

fn normalize_entry(name: &str, config: &Value) -> Result<ConnectionDescriptor, ParseError> {
    let config = config.as_object().ok_or_else(|| {
        ParseError::malformed(
            "JSON configuration",
            format!("server '{name}' must be a JSON object"),
        )
    })?;
    normalize_server_config(name, config)
}

/// Normalize one server config object into a descriptor.
///
/// # Errors
///
/// Returns [`ParseError::MalformedPayload`] for an unsupported `type`, and
/// [`ParseError::MissingServerField`] when a stdio server has no command or a
/// remote server has no URL.
pub fn normalize_server_config(
    name: &str,
    config: &Map<String, Value>,
) -> Result<ConnectionDescriptor, ParseError> {
    let url = config
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty());

    let transport = match config.get("type").and_then(Value::as_str) {
        Some(kind) => Transport::from_type_field(kind).ok_or_else(|| {
            ParseError::malformed(
                "server configuration",
                format!("server '{name}' has unsupported type '{kind}'"),
            )
        })?,
        None => Transport::infer(url),
    };
    trace!(server = name, transport = transport.as_str(), "normalizing server config");

    let endpoint = match transport {
        Transport::Stdio => stdio_endpoint(name, config)?,
        Transport::Sse | Transport::Http => {
            let url = url.ok_or_else(|| ParseError::missing_server_field(name, "url"))?;
            let headers = config.get("headers").and_then(Value::as_object).map(string_map);
            Endpoint::remote(transport, url.to_string(), headers)
                .ok_or_else(|| ParseError::missing_server_field(name, "url"))?
        }
    };

    Ok(ConnectionDescriptor {
        name: name.to_string(),
        endpoint,
        env: config.get("env").and_then(Value::as_object).map(string_map),
    })
}

fn stdio_endpoint(name: &str, config: &Map<String, Value>) -> Result<Endpoint, ParseError> {
    let mut tokens: Vec<String> = match config.get("command") {
        Some(Value::String(command)) => vec![command.clone()],
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    };

    // `args` never supplies the command itself.
    let command_given = tokens.first().is_some_and(|command| !command.trim().is_empty());
    if !command_given {
        return Err(ParseError::missing_server_field(name, "command"));
    }
    let mut args = tokens.split_off(1);
    let command = tokens.remove(0);
    if let Some(extra) = config.get("args").and_then(Value::as_array) {
        args.extend(extra.iter().filter_map(scalar_to_string));
    }
    Ok(Endpoint::Stdio { command, args })
}

fn string_map(object: &Map<String, Value>) -> StringMap {
    object
        .iter()
        .filter_map(|(key, value)| scalar_to_string(value).map(|value| (key.clone(), value)))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
