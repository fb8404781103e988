//! Per-invocation context shared by command handlers.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::connection::Importer;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    /// Explicit config path, when one was given.
    pub config_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let output_format = cli.requested_format().unwrap_or(config.output.format);

        if !config.output.color || !output_format.use_colors() {
            console::set_colors_enabled(false);
        }

        Ok(Self {
            config_path: cli.config.clone(),
            output_format,
            config,
        })
    }

    #[must_use]
    pub const fn robot_mode(&self) -> bool {
        self.output_format.is_machine_readable()
    }

    #[must_use]
    pub fn importer(&self) -> Importer {
        Importer::new(self.config.import_options())
    }
}
