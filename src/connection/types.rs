//! Normalized connection descriptor model and its canonical JSON encodings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered string-to-string mapping used for `env` and `headers`.
pub type StringMap = BTreeMap<String, String>;

/// Mechanism a server is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Local process speaking over stdin/stdout
    Stdio,
    /// Server-sent events endpoint
    Sse,
    /// Plain (streamable) HTTP endpoint
    Http,
}

impl Transport {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Sse => "sse",
            Self::Http => "http",
        }
    }

    /// Interpret an explicit `type` value from a JSON config.
    ///
    /// Exact names win; otherwise any value mentioning `sse` or `http` maps to
    /// that transport. Returns `None` for values naming neither.
    #[must_use]
    pub fn from_type_field(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "stdio" => Some(Self::Stdio),
            "sse" => Some(Self::Sse),
            "http" | "streamable-http" | "streamable_http" | "streamablehttp" => Some(Self::Http),
            other if other.contains("sse") => Some(Self::Sse),
            other if other.contains("http") => Some(Self::Http),
            _ => None,
        }
    }

    /// Infer the transport of a config without a `type` field.
    #[must_use]
    pub fn infer(url: Option<&str>) -> Self {
        match url {
            Some(url) if url.contains("sse") => Self::Sse,
            Some(_) => Self::Http,
            None => Self::Stdio,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-specific half of a descriptor.
///
/// Stdio endpoints cannot carry a URL or headers and remote endpoints cannot
/// carry a command, so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Endpoint {
    Stdio {
        command: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<String>,
    },
    Sse {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        headers: Option<StringMap>,
    },
    Http {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        headers: Option<StringMap>,
    },
}

impl Endpoint {
    /// Build a remote endpoint. Returns `None` for [`Transport::Stdio`].
    #[must_use]
    pub fn remote(transport: Transport, url: String, headers: Option<StringMap>) -> Option<Self> {
        match transport {
            Transport::Stdio => None,
            Transport::Sse => Some(Self::Sse { url, headers }),
            Transport::Http => Some(Self::Http { url, headers }),
        }
    }

    #[must_use]
    pub const fn transport(&self) -> Transport {
        match self {
            Self::Stdio { .. } => Transport::Stdio,
            Self::Sse { .. } => Transport::Sse,
            Self::Http { .. } => Transport::Http,
        }
    }
}

/// A normalized MCP server definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub endpoint: Endpoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<StringMap>,
}

impl ConnectionDescriptor {
    #[must_use]
    pub fn stdio(name: impl Into<String>, command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: Endpoint::Stdio {
                command: command.into(),
                args,
            },
            env: None,
        }
    }

    #[must_use]
    pub fn sse(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: Endpoint::Sse {
                url: url.into(),
                headers: None,
            },
            env: None,
        }
    }

    #[must_use]
    pub fn http(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: Endpoint::Http {
                url: url.into(),
                headers: None,
            },
            env: None,
        }
    }

    #[must_use]
    pub fn with_env(mut self, env: StringMap) -> Self {
        self.env = Some(env);
        self
    }

    /// Attach headers. Ignored for stdio descriptors.
    #[must_use]
    pub fn with_headers(mut self, new_headers: StringMap) -> Self {
        match &mut self.endpoint {
            Endpoint::Sse { headers, .. } | Endpoint::Http { headers, .. } => {
                *headers = Some(new_headers);
            }
            Endpoint::Stdio { .. } => {}
        }
        self
    }

    #[must_use]
    pub const fn transport(&self) -> Transport {
        self.endpoint.transport()
    }

    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match &self.endpoint {
            Endpoint::Stdio { command, .. } => Some(command),
            _ => None,
        }
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        match &self.endpoint {
            Endpoint::Stdio { args, .. } => args,
            _ => &[],
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.endpoint {
            Endpoint::Sse { url, .. } | Endpoint::Http { url, .. } => Some(url),
            Endpoint::Stdio { .. } => None,
        }
    }

    #[must_use]
    pub const fn headers(&self) -> Option<&StringMap> {
        match &self.endpoint {
            Endpoint::Sse { headers, .. } | Endpoint::Http { headers, .. } => headers.as_ref(),
            Endpoint::Stdio { .. } => None,
        }
    }

    /// Encode as the single-inline JSON shape (no name).
    ///
    /// Empty `args` and absent maps are omitted.
    #[must_use]
    pub fn to_inline_json(&self) -> Value {
        let mut config = Map::new();
        config.insert("type".to_string(), Value::from(self.transport().as_str()));
        match &self.endpoint {
            Endpoint::Stdio { command, args } => {
                config.insert("command".to_string(), Value::from(command.as_str()));
                if !args.is_empty() {
                    config.insert("args".to_string(), Value::from(args.clone()));
                }
            }
            Endpoint::Sse { url, headers } | Endpoint::Http { url, headers } => {
                config.insert("url".to_string(), Value::from(url.as_str()));
                if let Some(headers) = headers {
                    config.insert("headers".to_string(), string_map_value(headers));
                }
            }
        }
        if let Some(env) = &self.env {
            config.insert("env".to_string(), string_map_value(env));
        }
        Value::Object(config)
    }

    /// Encode as `{ "<name>": { ...inline... } }`.
    #[must_use]
    pub fn to_named_json(&self) -> Value {
        let mut root = Map::new();
        root.insert(self.name.clone(), self.to_inline_json());
        Value::Object(root)
    }
}

/// Encode descriptors as an `mcpServers` wrapper, the shape config files use.
#[must_use]
pub fn to_mcp_servers_json(descriptors: &[ConnectionDescriptor]) -> Value {
    let servers: Map<String, Value> = descriptors
        .iter()
        .map(|descriptor| (descriptor.name.clone(), descriptor.to_inline_json()))
        .collect();
    let mut root = Map::new();
    root.insert("mcpServers".to_string(), Value::Object(servers));
    Value::Object(root)
}

fn string_map_value(map: &StringMap) -> Value {
    Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
            .collect(),
    )
}
