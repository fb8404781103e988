//! Context-aware error suggestions.
//!
//! This module provides dynamic suggestion generation based on error context,
//! complementing the static suggestions in the `codes` module.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
///
/// Falls back to [`ErrorCode::suggestion`] when the context carries nothing
/// more specific.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::ImportInvalidJson => suggest_invalid_json(context),
        ErrorCode::ImportMissingField => suggest_import_missing_field(context),
        ErrorCode::DocumentMissingField => suggest_document_missing_field(context),
        ErrorCode::ConfigMissingRequired => suggest_config_missing_required(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_invalid_json(context: Option<&Value>) -> String {
    let line = context.and_then(|c| c.get("line")).and_then(Value::as_u64);
    let column = context.and_then(|c| c.get("column")).and_then(Value::as_u64);

    match (line, column) {
        (Some(line), Some(column)) => format!(
            "JSON syntax error at line {line}, column {column}. {}",
            ErrorCode::ImportInvalidJson.suggestion()
        ),
        _ => ErrorCode::ImportInvalidJson.suggestion().to_string(),
    }
}

fn suggest_import_missing_field(context: Option<&Value>) -> String {
    let server = context.and_then(|c| c.get("server")).and_then(Value::as_str);
    let field = context.and_then(|c| c.get("field")).and_then(Value::as_str);

    match (server, field) {
        (Some(server), Some("command")) => format!(
            "Server '{server}' has no command. Put the executable after `--`, e.g. `claude mcp add {server} -- npx -y <package>`"
        ),
        (Some(server), Some("url")) => format!(
            "Server '{server}' is a remote server but has no `url`. Add the endpoint URL or set `\"type\": \"stdio\"`"
        ),
        _ => ErrorCode::ImportMissingField.suggestion().to_string(),
    }
}

fn suggest_document_missing_field(context: Option<&Value>) -> String {
    let field = context.and_then(|c| c.get("field")).and_then(Value::as_str);

    match field {
        Some(field) => format!(
            "Add a `{field}: ...` line to the frontmatter block between the `---` lines"
        ),
        None => ErrorCode::DocumentMissingField.suggestion().to_string(),
    }
}

fn suggest_config_missing_required(context: Option<&Value>) -> String {
    let key = context
        .and_then(|c| c.get("config_key"))
        .and_then(Value::as_str);

    match key {
        Some(key) => format!(
            "Set `{key}` in ~/.config/ccimport/config.toml or pass --config <path>"
        ),
        None => ErrorCode::ConfigMissingRequired.suggestion().to_string(),
    }
}
