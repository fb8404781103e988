use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::{CcError, Result, StructuredError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON inside the response envelope
    Json,
    /// One compact JSON object per line, no envelope
    Jsonl,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// Envelope for machine-readable output.
#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    /// Failure with code, suggestion, and context
    #[serde(rename = "error")]
    Error(StructuredError),
}

impl From<&CcError> for RobotStatus {
    fn from(err: &CcError) -> Self {
        Self::Error(err.to_structured())
    }
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

/// Create a robot error response carrying the structured form of `err`.
pub fn robot_error_structured(err: &CcError) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: err.into(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    emit_json(response)
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Emit a slice of items in JSONL format (one JSON object per line)
pub fn emit_jsonl<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        let json = serde_json::to_string(item)?;
        println!("{json}");
    }
    Ok(())
}

/// Line-oriented layout for human and plain output.
pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines
            .push(format!("{} {value}", style(padded).dim()));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, ParseError};

    #[test]
    fn output_format_use_colors() {
        assert!(OutputFormat::Human.use_colors());
        assert!(!OutputFormat::Json.use_colors());
        assert!(!OutputFormat::Jsonl.use_colors());
        assert!(!OutputFormat::Plain.use_colors());
    }

    #[test]
    fn output_format_is_machine_readable() {
        assert!(!OutputFormat::Human.is_machine_readable());
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(OutputFormat::Jsonl.is_machine_readable());
        assert!(!OutputFormat::Plain.is_machine_readable());
    }

    #[test]
    fn output_format_default_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }

    #[test]
    fn robot_ok_serialization() {
        let response = robot_ok(serde_json::json!({ "count": 1 }));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn robot_error_structured_includes_all_fields() {
        let err = CcError::from(ParseError::MissingField { field: "name" });
        let response = robot_error_structured(&err);

        match response.status {
            RobotStatus::Error(structured) => {
                assert_eq!(structured.code, ErrorCode::DocumentMissingField);
                assert_eq!(structured.numeric_code, 201);
                assert!(structured.message.contains("`name`"));
                assert!(structured.suggestion.contains("`name: ...`"));
                assert!(structured.recoverable);
                assert_eq!(structured.category, "document");
            }
            RobotStatus::Ok => panic!("Expected error status"),
        }
    }

    #[test]
    fn robot_error_structured_serialization() {
        let err = CcError::from(ParseError::NoServerConfig);
        let json = serde_json::to_string(&robot_error_structured(&err)).unwrap();

        assert!(json.contains("\"error\":{"));
        assert!(json.contains("IMPORT_NO_SERVER_CONFIG"));
        assert!(json.contains("\"numeric_code\":102"));
        assert!(json.contains("\"kind\":\"UNRECOGNIZED_FORMAT\""));
        assert!(json.contains("\"data\":null"));
    }

    #[test]
    fn human_layout_lines() {
        console::set_colors_enabled(false);
        let mut layout = HumanLayout::new();
        layout.section("Servers").kv("name", "fs").bullet("npx");
        assert_eq!(layout.build(), "Servers\n-------\nname           fs\n- npx");
    }
}
