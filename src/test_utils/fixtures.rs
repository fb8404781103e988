use std::path::PathBuf;

use tempfile::TempDir;

/// Test fixture providing an isolated directory for input files.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a skill document under `commands/<name>.md`.
    pub fn create_skill(&self, name: &str, content: &str) -> PathBuf {
        self.create_file(&format!("commands/{name}.md"), content)
    }

    /// Create an agent document under `agents/<name>.md`.
    pub fn create_agent(&self, name: &str, content: &str) -> PathBuf {
        self.create_file(&format!("agents/{name}.md"), content)
    }
}

/// A complete skill document exercising every recognized key.
pub const SAMPLE_SKILL: &str = "---
name: commit
description: Write a commit message
skill-type: command
allowed-tools: Bash(git diff:*), Read
argument-hint: [scope]
model: haiku
disable-model-invocation: false
tags: git, vcs
---

Summarize the staged diff as a conventional commit message.
";

/// A complete agent document.
pub const SAMPLE_AGENT: &str = "---
name: test-runner
description: Runs the test suite and reports failures
tools: Bash, Read, Grep
model: sonnet
permission-mode: acceptEdits
skills: commit
---

Run the tests. Report each failure with its file and line.
";

/// A Claude Desktop style config with two servers.
pub const SAMPLE_MCP_SERVERS: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/tmp"]
    },
    "remote": {
      "type": "sse",
      "url": "https://mcp.example.com/sse",
      "headers": { "Authorization": "Bearer token" }
    }
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::read_input;
    use crate::connection::Transport;
    use crate::frontmatter::{parse_agent_document, parse_skill_document};

    #[test]
    fn sample_files_parse_from_disk() {
        let fixture = UnitTestFixture::new();
        let skill_path = fixture.create_skill("commit", SAMPLE_SKILL);
        let agent_path = fixture.create_agent("test-runner", SAMPLE_AGENT);
        let servers_path = fixture.create_file("mcp.json", SAMPLE_MCP_SERVERS);

        let skill = parse_skill_document(&read_input(Some(skill_path.as_path())).unwrap()).unwrap();
        assert_eq!(skill.name, "commit");
        assert_eq!(
            skill.allowed_tools.unwrap(),
            vec!["Bash(git", "diff:*)", "Read"]
        );
        assert_eq!(skill.disable_model_invocation, Some(false));

        let agent = parse_agent_document(&read_input(Some(agent_path.as_path())).unwrap()).unwrap();
        assert_eq!(agent.permission_mode.as_deref(), Some("acceptEdits"));
        assert_eq!(agent.skills.unwrap(), vec!["commit"]);

        let servers =
            crate::parse_connection_text(&read_input(Some(servers_path.as_path())).unwrap()).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[1].transport(), Transport::Sse);
        assert_eq!(servers[1].headers().unwrap()["Authorization"], "Bearer token");
    }
}
