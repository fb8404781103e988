//! Shell dialects: `claude mcp add` and `claude mcp add-json`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::json::normalize_server_config;
use super::types::{ConnectionDescriptor, Endpoint, StringMap, Transport};
use crate::error::ParseError;

/// Backslash and line ending, with blanks on either side.
static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\\[ \t]*\r?\n[ \t]*").unwrap());

static ADD_JSON_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^claude\s+mcp\s+add-json(?:\s+|$)").unwrap());

static ADD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^claude\s+mcp\s+add(?:\s+|$)").unwrap());

static TRAILING_SCOPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:-s|--scope)(?:\s+|=)[A-Za-z_-]+\s*$").unwrap());

static SHELL_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$([A-Za-z_][A-Za-z0-9_]*)(.*)$").unwrap());

/// Join backslash-continued lines into one logical line.
pub fn normalize_continuations(text: &str) -> Cow<'_, str> {
    CONTINUATION.replace_all(text, " ")
}

/// Text following the `claude mcp add-json` prefix, if present.
pub(crate) fn strip_add_json_prefix(text: &str) -> Option<&str> {
    ADD_JSON_PREFIX.find(text).map(|m| &text[m.end()..])
}

/// Text following the `claude mcp add` prefix, if present.
pub(crate) fn strip_add_prefix(text: &str) -> Option<&str> {
    ADD_PREFIX.find(text).map(|m| &text[m.end()..])
}

// =============================================================================
// add-json
// =============================================================================

/// Parse the tail of `claude mcp add-json [-s scope] <name> '<json>' [-s scope]`.
pub(crate) fn parse_add_json(rest: &str) -> Result<ConnectionDescriptor, ParseError> {
    let mut remaining = rest;
    let name = loop {
        let Some((word, tail)) = split_word(remaining) else {
            return Err(ParseError::malformed("add-json command", "missing server name"));
        };
        remaining = tail;
        match word {
            "-s" | "--scope" => {
                let Some((_, tail)) = split_word(remaining) else {
                    return Err(ParseError::malformed("add-json command", "flag --scope requires a value"));
                };
                remaining = tail;
            }
            scope if scope.starts_with("--scope=") => {}
            word if word.starts_with('{') => {
                return Err(ParseError::malformed("add-json command", "missing server name"));
            }
            word => break strip_quotes(word).to_string(),
        }
    };

    let payload = TRAILING_SCOPE.replace(remaining.trim(), "");
    let payload = unquote_payload(payload.trim());
    if payload.is_empty() {
        return Err(ParseError::malformed("add-json command", "missing JSON payload"));
    }

    let value: Value =
        serde_json::from_str(&payload).map_err(|source| ParseError::InvalidJson {
            context: "add-json payload",
            source,
        })?;
    let config = value.as_object().ok_or_else(|| {
        ParseError::malformed("add-json payload", "expected a JSON object")
    })?;

    debug!(server = %name, "parsed add-json payload");
    normalize_server_config(&name, config)
}

fn split_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    Some((&text[..end], &text[end..]))
}

fn strip_quotes(word: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = word
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    word
}

/// Remove one layer of shell quoting around a JSON literal.
fn unquote_payload(payload: &str) -> Cow<'_, str> {
    if payload.len() >= 2 {
        if let Some(inner) = payload.strip_prefix('\'').and_then(|p| p.strip_suffix('\'')) {
            return Cow::Borrowed(inner);
        }
        if let Some(inner) = payload.strip_prefix('"').and_then(|p| p.strip_suffix('"')) {
            return Cow::Owned(unescape_double_quoted(inner));
        }
    }
    Cow::Borrowed(payload)
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// add
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionFlag {
    Env,
    Scope,
    Transport,
    Header,
}

impl OptionFlag {
    /// Recognize a flag token, splitting off an inline `--flag=value`.
    fn parse(token: &str) -> Option<(Self, Option<&str>)> {
        let (flag, inline) = match token.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
            _ => (token, None),
        };
        let kind = match flag {
            "-e" | "--env" => Self::Env,
            "-s" | "--scope" => Self::Scope,
            "-t" | "--transport" => Self::Transport,
            "-H" | "--header" => Self::Header,
            _ => return None,
        };
        Some((kind, inline))
    }

    const fn long_name(self) -> &'static str {
        match self {
            Self::Env => "--env",
            Self::Scope => "--scope",
            Self::Transport => "--transport",
            Self::Header => "--header",
        }
    }
}

#[derive(Debug, Default)]
struct AddCommand {
    name: Option<String>,
    transport: Option<Transport>,
    env: StringMap,
    headers: StringMap,
    command_line: Vec<String>,
}

impl AddCommand {
    fn apply(&mut self, flag: OptionFlag, value: String) -> Result<(), ParseError> {
        match flag {
            OptionFlag::Env => {
                let (key, value) = value.split_once('=').ok_or_else(|| {
                    ParseError::malformed(
                        "add command",
                        format!("environment assignment '{value}' must be KEY=value"),
                    )
                })?;
                let key = key.trim();
                if key.is_empty() {
                    return Err(ParseError::malformed(
                        "add command",
                        "environment assignment has an empty key",
                    ));
                }
                self.env.insert(key.to_string(), env_placeholder(value));
            }
            OptionFlag::Header => {
                let (key, value) = value.split_once(':').ok_or_else(|| {
                    ParseError::malformed(
                        "add command",
                        format!("header '{value}' must be 'Key: Value'"),
                    )
                })?;
                self.headers
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            OptionFlag::Transport => {
                let transport = Transport::from_type_field(&value).ok_or_else(|| {
                    ParseError::malformed(
                        "add command",
                        format!("unsupported transport '{value}'"),
                    )
                })?;
                self.transport = Some(transport);
            }
            OptionFlag::Scope => {}
        }
        Ok(())
    }

    fn push_positional(&mut self, word: String) {
        if self.name.is_none() {
            self.name = Some(word);
        } else {
            self.command_line.push(word);
        }
    }

    fn into_descriptor(self) -> Result<ConnectionDescriptor, ParseError> {
        let name = self
            .name
            .ok_or_else(|| ParseError::malformed("add command", "missing server name"))?;
        let mut command_line = self.command_line.into_iter();

        let endpoint = match self.transport.unwrap_or(Transport::Stdio) {
            Transport::Stdio => {
                let command = command_line
                    .next()
                    .filter(|command| !command.trim().is_empty())
                    .ok_or_else(|| ParseError::missing_server_field(&name, "command"))?;
                if !self.headers.is_empty() {
                    debug!(server = %name, "ignoring headers on stdio server");
                }
                Endpoint::Stdio {
                    command,
                    args: command_line.collect(),
                }
            }
            transport => {
                let url = command_line
                    .next()
                    .ok_or_else(|| ParseError::missing_server_field(&name, "url"))?;
                let extra = command_line.count();
                if extra > 0 {
                    debug!(server = %name, extra, "ignoring tokens after remote url");
                }
                let headers = (!self.headers.is_empty()).then_some(self.headers);
                Endpoint::remote(transport, url, headers)
                    .ok_or_else(|| ParseError::missing_server_field(&name, "url"))?
            }
        };

        Ok(ConnectionDescriptor {
            name,
            endpoint,
            env: (!self.env.is_empty()).then_some(self.env),
        })
    }
}

/// Parse the tail of `claude mcp add [options] <name> [options] [--] <command> [args...]`.
///
/// Only unquoted words act as flags or as the `--` separator.
pub(crate) fn parse_add(rest: &str) -> Result<ConnectionDescriptor, ParseError> {
    let mut words = split_words(rest).into_iter();
    let mut command = AddCommand::default();
    let mut after_separator = false;

    while let Some(word) = words.next() {
        // Remote servers take flags after the URL too.
        let remote = matches!(command.transport, Some(Transport::Sse | Transport::Http));
        if after_separator || (!remote && !command.command_line.is_empty()) {
            command.command_line.push(word.text);
            continue;
        }
        if word.quoted {
            command.push_positional(word.text);
            continue;
        }
        if word.text == "--" {
            after_separator = true;
            continue;
        }
        if let Some((flag, inline)) = OptionFlag::parse(&word.text) {
            let value = match inline {
                Some(value) => value.to_string(),
                None => words.next().map(|value| value.text).ok_or_else(|| {
                    ParseError::malformed(
                        "add command",
                        format!("flag {} requires a value", flag.long_name()),
                    )
                })?,
            };
            command.apply(flag, value)?;
            continue;
        }
        if word.text.len() > 1 && word.text.starts_with('-') {
            debug!(flag = %word.text, "skipping unrecognized option");
            continue;
        }
        command.push_positional(word.text);
    }

    command.into_descriptor()
}

/// Re-wrap a `$VAR` reference as a `${VAR}` placeholder.
fn env_placeholder(value: &str) -> String {
    if value.starts_with("${") {
        return value.to_string();
    }
    match SHELL_VAR.captures(value) {
        Some(caps) => format!("${{{}}}{}", &caps[1], &caps[2]),
        None => value.to_string(),
    }
}

/// One word of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Word {
    text: String,
    /// Any part of the word was quoted.
    quoted: bool,
}

/// Split a command line into words.
///
/// Single and double quotes group characters and are dropped. Quotes do not
/// nest, adjacent quoted and bare segments join into one word, and backslashes
/// are kept literally. An unterminated quote runs to the end of the line.
fn split_words(line: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                in_word = true;
                quoted = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(Word {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    in_word = false;
                    quoted = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(Word {
            text: current,
            quoted,
        });
    }
    words
}
