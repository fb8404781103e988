//! ccimport import - Import MCP servers from pasted text

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::AppContext;
use crate::cli::commands::{join_or_dash, read_input};
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::connection::{to_mcp_servers_json, ConnectionDescriptor, Import};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File containing the command or JSON (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Print the servers in a config-file shape instead of the import report
    #[arg(long = "as", value_enum, value_name = "SHAPE")]
    pub as_shape: Option<ExportShape>,
}

/// Config-file layouts `--as` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportShape {
    /// `{ "mcpServers": { "<name>": {...} } }`
    McpServers,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let import = ctx.importer().parse_detailed(&text)?;

    if let Some(ExportShape::McpServers) = args.as_shape {
        return output::emit_json(&to_mcp_servers_json(&import.servers));
    }

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&import)),
        OutputFormat::Jsonl => output::emit_jsonl(&import.servers),
        OutputFormat::Human | OutputFormat::Plain => {
            output::emit_human(render_import(&import));
            Ok(())
        }
    }
}

fn render_import(import: &Import) -> HumanLayout {
    let mut layout = HumanLayout::new();
    let shape = import
        .shape
        .map_or(String::new(), |shape| format!(" ({})", shape.as_str()));
    let plural = if import.servers.len() == 1 { "" } else { "s" };
    layout.title(&format!(
        "Imported {} server{plural} from {}{shape}",
        import.servers.len(),
        import.dialect
    ));

    for server in &import.servers {
        layout.blank();
        render_server(&mut layout, server);
    }
    layout
}

fn render_server(layout: &mut HumanLayout, server: &ConnectionDescriptor) {
    layout.section(&server.name);
    layout.kv("transport", server.transport().as_str());
    if let Some(command) = server.command() {
        layout.kv("command", command);
        layout.kv("args", &join_or_dash(Some(server.args())));
    }
    if let Some(url) = server.url() {
        layout.kv("url", url);
    }
    if let Some(headers) = server.headers() {
        for (key, value) in headers {
            layout.kv("header", &format!("{key}: {value}"));
        }
    }
    if let Some(env) = &server.env {
        for (key, value) in env {
            layout.kv("env", &format!("{key}={value}"));
        }
    }
}
