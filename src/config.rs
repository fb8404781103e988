use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::output::OutputFormat;
use crate::connection::{ImportOptions, DEFAULT_FALLBACK_NAME};
use crate::error::{CcError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CCIMPORT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration: defaults, then the global file or an explicit
    /// file, then `CCIMPORT_*` environment overrides.
    ///
    /// An explicit path (argument or `CCIMPORT_CONFIG`) must exist; a missing
    /// global file is skipped.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CcError::ConfigNotFound(path));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// `<config dir>/ccimport/config.toml`, when the platform has a config dir.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ccimport/config.toml"))
    }

    /// Options for the connection importer.
    #[must_use]
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            fallback_name: self.import.fallback_name.clone(),
        }
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(path) = Self::global_path() else {
            debug!("no platform config directory; using defaults");
            return Ok(None);
        };
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CcError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CcError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.import {
            self.import.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(env_string)
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CCIMPORT_IMPORT_FALLBACK_NAME") {
            self.import.fallback_name = value;
        }
        if let Some(value) = lookup("CCIMPORT_OUTPUT_FORMAT") {
            self.output.format = parse_output_format(&value)?;
        }
        if let Some(value) = lookup("CCIMPORT_OUTPUT_COLOR") {
            self.output.color = parse_bool(&value);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.import.fallback_name.trim().is_empty() {
            return Err(CcError::MissingConfig("import.fallback_name".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Name given to a bare inline JSON server object.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            fallback_name: default_fallback_name(),
        }
    }
}

impl ImportConfig {
    fn merge(&mut self, patch: ImportPatch) {
        if let Some(value) = patch.fallback_name {
            self.fallback_name = value;
        }
    }
}

fn default_fallback_name() -> String {
    DEFAULT_FALLBACK_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.color {
            self.color = value;
        }
    }
}

const fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    pub import: Option<ImportPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportPatch {
    pub fallback_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value.trim(), true).map_err(|_| {
        CcError::Config(format!(
            "invalid output format {value} (expected human|json|jsonl|plain)"
        ))
    })
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
