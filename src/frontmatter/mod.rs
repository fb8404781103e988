//! Frontmatter document parser for skill and agent definitions.
//!
//! A document may open with a `---` delimited block of flat `key: value`
//! lines followed by a markdown body:
//!
//! ```text
//! ---
//! name: review
//! allowed-tools: Read, Grep
//! ---
//! Review the staged diff.
//! ```
//!
//! The block grammar is deliberately narrow. It is not YAML: there is no
//! nesting, no lists, and no quoting. Lines without a colon are skipped.

mod agent;
mod skill;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use agent::{parse_agent_document, AgentRecord};
pub use skill::{parse_skill_document, SkillRecord, SkillVariant};

/// Opening and closing line of a frontmatter block.
pub const DELIMITER: &str = "---";

/// A split document: raw metadata pairs and the trimmed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Keys exactly as written; a repeated key keeps its last value.
    pub metadata: BTreeMap<String, String>,
    pub body: String,
}

/// Split `text` into frontmatter metadata and body.
///
/// Returns `None` when the first line of the trimmed text is not exactly
/// [`DELIMITER`] or when no later line is. Surrounding blanks on a delimiter
/// line are ignored. Neither case is an error; callers fall back to treating
/// the whole text as the body.
#[must_use]
pub fn extract_frontmatter(text: &str) -> Option<Frontmatter> {
    let trimmed = text.trim();
    let (open, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
    if open.trim() != DELIMITER {
        return None;
    }

    let mut block = Vec::new();
    let mut body_start = None;
    let mut consumed = 0;
    for line in rest.split_inclusive('\n') {
        consumed += line.len();
        if line.trim() == DELIMITER {
            body_start = Some(consumed);
            break;
        }
        block.push(line);
    }
    let body = rest[body_start?..].trim();

    let mut metadata = BTreeMap::new();
    for line in block.iter().map(|line| line.trim_end_matches(['\r', '\n'])) {
        let Some((key, value)) = line.split_once(':') else {
            if !line.trim().is_empty() {
                trace!(line, "skipping frontmatter line without a colon");
            }
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            trace!(line, "skipping frontmatter line with an empty key or value");
            continue;
        }
        metadata.insert(key.to_string(), value.to_string());
    }

    Some(Frontmatter {
        metadata,
        body: body.to_string(),
    })
}

/// Logical field recognized in a frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Description,
    AllowedTools,
    SkillType,
    DisableModelInvocation,
    ArgumentHint,
    Model,
    Tags,
    Tools,
    Skills,
    PermissionMode,
}

/// Spelling a key was written in. Later variants win over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum KeyForm {
    CamelCase,
    Canonical,
}

impl FieldKey {
    /// Resolve a source key to its logical field. Case-sensitive.
    #[must_use]
    pub fn from_alias(key: &str) -> Option<Self> {
        Self::resolve(key).map(|(field, _)| field)
    }

    fn resolve(key: &str) -> Option<(Self, KeyForm)> {
        use KeyForm::{CamelCase, Canonical};

        let resolved = match key {
            "name" => (Self::Name, Canonical),
            "description" => (Self::Description, Canonical),
            "allowed-tools" => (Self::AllowedTools, Canonical),
            "allowedTools" => (Self::AllowedTools, CamelCase),
            "skill-type" => (Self::SkillType, Canonical),
            "skillType" => (Self::SkillType, CamelCase),
            "disable-model-invocation" => (Self::DisableModelInvocation, Canonical),
            "disableModelInvocation" => (Self::DisableModelInvocation, CamelCase),
            "argument-hint" => (Self::ArgumentHint, Canonical),
            "argumentHint" => (Self::ArgumentHint, CamelCase),
            "model" => (Self::Model, Canonical),
            "tags" => (Self::Tags, Canonical),
            "tools" => (Self::Tools, Canonical),
            "skills" => (Self::Skills, Canonical),
            "permission-mode" => (Self::PermissionMode, Canonical),
            "permissionMode" => (Self::PermissionMode, CamelCase),
            _ => return None,
        };
        Some(resolved)
    }

    /// The spelling used in documentation and error messages.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::AllowedTools => "allowed-tools",
            Self::SkillType => "skill-type",
            Self::DisableModelInvocation => "disable-model-invocation",
            Self::ArgumentHint => "argument-hint",
            Self::Model => "model",
            Self::Tags => "tags",
            Self::Tools => "tools",
            Self::Skills => "skills",
            Self::PermissionMode => "permission-mode",
        }
    }
}

/// Metadata resolved to logical fields.
///
/// When both spellings of a field appear, the hyphenated one wins regardless
/// of order.
#[derive(Debug, Default)]
pub struct Fields {
    values: BTreeMap<FieldKey, (KeyForm, String)>,
}

impl Fields {
    #[must_use]
    pub fn from_metadata(metadata: &BTreeMap<String, String>) -> Self {
        let mut values: BTreeMap<FieldKey, (KeyForm, String)> = BTreeMap::new();
        for (key, value) in metadata {
            let Some((field, form)) = FieldKey::resolve(key) else {
                trace!(key = key.as_str(), "ignoring unknown frontmatter key");
                continue;
            };
            let replace = values
                .get(&field)
                .is_none_or(|(existing, _)| form > *existing);
            if replace {
                values.insert(field, (form, value.clone()));
            }
        }
        Self { values }
    }

    #[must_use]
    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.values.get(&field).map(|(_, value)| value.as_str())
    }

    pub(crate) fn owned(&self, field: FieldKey) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    pub(crate) fn list(
        &self,
        field: FieldKey,
        split: fn(&str) -> Vec<String>,
    ) -> Option<Vec<String>> {
        self.get(field).map(split).filter(|items| !items.is_empty())
    }
}

/// Split on commas; items trimmed, empties dropped.
#[must_use]
pub fn split_commas(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split on any run of commas and whitespace.
#[must_use]
pub fn split_commas_or_whitespace(value: &str) -> Vec<String> {
    value
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
