//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod agent;
pub mod config;
pub mod import;
pub mod skill;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Import(args) => import::run(ctx, args),
        Commands::Skill(args) => skill::run(ctx, args),
        Commands::Agent(args) => agent::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}

/// Read command input from `path`, or from stdin when absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Render an optional list for human output.
pub(crate) fn join_or_dash(items: Option<&[String]>) -> String {
    use itertools::Itertools;

    match items {
        Some(items) if !items.is_empty() => items.iter().join(", "),
        _ => "-".to_string(),
    }
}
