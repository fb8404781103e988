//! ccimport skill - Parse a skill document

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::{join_or_dash, read_input};
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::error::Result;
use crate::frontmatter::{parse_skill_document, SkillRecord};

#[derive(Args, Debug)]
pub struct SkillArgs {
    /// Markdown document to parse (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &SkillArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let skill = parse_skill_document(&text)?;

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&skill)),
        OutputFormat::Jsonl => output::emit_jsonl(std::slice::from_ref(&skill)),
        OutputFormat::Human | OutputFormat::Plain => {
            output::emit_human(render_skill(&skill));
            Ok(())
        }
    }
}

fn render_skill(skill: &SkillRecord) -> HumanLayout {
    let mut layout = HumanLayout::new();
    let name = if skill.name.is_empty() {
        "(unnamed)"
    } else {
        skill.name.as_str()
    };
    layout.section(name);
    layout.kv("variant", skill.variant.as_str());
    if let Some(description) = &skill.description {
        layout.kv("description", description);
    }
    layout.kv("allowed tools", &join_or_dash(skill.allowed_tools.as_deref()));
    if let Some(hint) = &skill.argument_hint {
        layout.kv("argument hint", hint);
    }
    if let Some(model) = &skill.model {
        layout.kv("model", model);
    }
    if let Some(disabled) = skill.disable_model_invocation {
        layout.kv("model invoke", if disabled { "disabled" } else { "enabled" });
    }
    layout.kv("tags", &join_or_dash(skill.tags.as_deref()));
    layout.blank();
    layout.push_line(skill.body.as_str());
    layout
}
