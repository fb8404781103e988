//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// ccimport - Import MCP server definitions and parse skill/agent documents
#[derive(Parser, Debug)]
#[command(name = "ccimport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/ccimport/config.toml)
    #[arg(long, global = true, env = "CCIMPORT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format requested on the command line, if any.
    ///
    /// `--output-format` wins over `--machine`. `None` defers to the config
    /// file.
    #[must_use]
    pub const fn requested_format(&self) -> Option<OutputFormat> {
        if let Some(fmt) = self.output_format {
            return Some(fmt);
        }
        if self.machine {
            return Some(OutputFormat::Json);
        }
        None
    }

    /// Whether errors should be reported as JSON before config is loaded.
    #[must_use]
    pub const fn machine_errors(&self) -> bool {
        match self.requested_format() {
            Some(fmt) => fmt.is_machine_readable(),
            None => false,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import MCP servers from a pasted command or JSON config
    Import(commands::import::ImportArgs),

    /// Parse a skill (slash command) document
    Skill(commands::skill::SkillArgs),

    /// Parse an agent document
    Agent(commands::agent::AgentArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),
}
