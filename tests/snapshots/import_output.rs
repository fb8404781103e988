use insta::assert_json_snapshot;

use ccimport::connection::to_mcp_servers_json;
use ccimport::{parse_agent_document, parse_connection_text};

#[test]
fn test_shell_add_descriptor() {
    let servers = parse_connection_text(
        "claude mcp add github -s user -e GITHUB_TOKEN=$GITHUB_TOKEN -- npx -y @modelcontextprotocol/server-github",
    )
    .unwrap();
    assert_json_snapshot!(servers[0], @r#"
    {
      "name": "github",
      "type": "stdio",
      "command": "npx",
      "args": [
        "-y",
        "@modelcontextprotocol/server-github"
      ],
      "env": {
        "GITHUB_TOKEN": "${GITHUB_TOKEN}"
      }
    }
    "#);
}

#[test]
fn test_remote_add_json_as_mcp_servers() {
    let servers = parse_connection_text(
        r#"claude mcp add-json linear '{"type":"sse","url":"https://mcp.linear.app/sse","headers":{"Authorization":"Bearer x"}}' --scope project"#,
    )
    .unwrap();
    assert_json_snapshot!(to_mcp_servers_json(&servers), @r#"
    {
      "mcpServers": {
        "linear": {
          "type": "sse",
          "url": "https://mcp.linear.app/sse",
          "headers": {
            "Authorization": "Bearer x"
          }
        }
      }
    }
    "#);
}

#[test]
fn test_agent_record() {
    let agent = parse_agent_document(
        "---\nname: reviewer\ndescription: Reviews diffs\ntools: Read, Grep\npermissionMode: plan\n---\n\nReview carefully.\n",
    )
    .unwrap();
    assert_json_snapshot!(agent, @r#"
    {
      "name": "reviewer",
      "description": "Reviews diffs",
      "body": "Review carefully.",
      "tools": [
        "Read",
        "Grep"
      ],
      "permissionMode": "plan"
    }
    "#);
}
