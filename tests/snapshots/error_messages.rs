use insta::assert_snapshot;

use ccimport::{parse_agent_document, parse_connection_text, parse_skill_document, CcError};

fn import_error(text: &str) -> CcError {
    parse_connection_text(text).unwrap_err().into()
}

#[test]
fn test_error_unrecognized_format() {
    let err = import_error("install the github server please");
    assert_snapshot!(err.to_string(), @"Unrecognized format: expected a `claude mcp add` command or a JSON MCP server configuration");
}

#[test]
fn test_error_missing_command_with_hint() {
    let err = import_error("claude mcp add github --");
    assert_snapshot!(err.to_string(), @"Server 'github' is missing required field `command`");
    assert_snapshot!(err.to_structured().suggestion, @"Server 'github' has no command. Put the executable after `--`, e.g. `claude mcp add github -- npx -y <package>`");
}

#[test]
fn test_error_missing_url_with_hint() {
    let err = import_error(r#"{"remote": {"type": "sse"}}"#);
    assert_snapshot!(err.to_string(), @"Server 'remote' is missing required field `url`");
    assert_snapshot!(err.to_structured().suggestion, @r#"Server 'remote' is a remote server but has no `url`. Add the endpoint URL or set `"type": "stdio"`"#);
}

#[test]
fn test_error_unsupported_transport() {
    let err = import_error("claude mcp add -t ftp files ftp://host");
    assert_snapshot!(err.to_string(), @"Malformed add command: unsupported transport 'ftp'");
}

#[test]
fn test_error_empty_input() {
    let err = import_error("   \n");
    assert_snapshot!(err.to_string(), @"Content is empty");
}

#[test]
fn test_error_missing_frontmatter_field_with_hint() {
    let err: CcError = parse_agent_document("---\nname: runner\n---\nRun.")
        .unwrap_err()
        .into();
    assert_snapshot!(err.to_string(), @"Missing required frontmatter field `description`");
    assert_snapshot!(err.to_structured().suggestion, @"Add a `description: ...` line to the frontmatter block between the `---` lines");
}

#[test]
fn test_error_empty_body() {
    let err = parse_skill_document("---\nname: x\n---\n").unwrap_err();
    assert_snapshot!(err.to_string(), @"Document body is empty after the frontmatter block");
}

#[test]
fn test_error_config_not_found() {
    let err = CcError::ConfigNotFound("/tmp/missing.toml".into());
    assert_snapshot!(err.to_string(), @"Config file not found: /tmp/missing.toml");
}
