//! ccimport agent - Parse an agent document

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::{join_or_dash, read_input};
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::error::Result;
use crate::frontmatter::{parse_agent_document, AgentRecord};

#[derive(Args, Debug)]
pub struct AgentArgs {
    /// Markdown document to parse (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &AgentArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let agent = parse_agent_document(&text)?;

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&agent)),
        OutputFormat::Jsonl => output::emit_jsonl(std::slice::from_ref(&agent)),
        OutputFormat::Human | OutputFormat::Plain => {
            output::emit_human(render_agent(&agent));
            Ok(())
        }
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { "(missing)" } else { value }
}

fn render_agent(agent: &AgentRecord) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.section(or_placeholder(&agent.name));
    layout.kv("description", or_placeholder(&agent.description));
    layout.kv("tools", &join_or_dash(agent.tools.as_deref()));
    layout.kv("model", agent.model.as_deref().unwrap_or("-"));
    layout.kv("permission", agent.permission_mode.as_deref().unwrap_or("-"));
    layout.kv("skills", &join_or_dash(agent.skills.as_deref()));
    layout.kv("tags", &join_or_dash(agent.tags.as_deref()));
    layout.blank();
    layout.push_line(agent.body.as_str());
    layout
}
