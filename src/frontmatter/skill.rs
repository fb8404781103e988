use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{extract_frontmatter, split_commas, split_commas_or_whitespace, FieldKey, Fields};
use crate::error::ParseError;

/// How a skill is surfaced: as a slash command or as a model-invoked skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillVariant {
    #[default]
    Command,
    Skill,
}

impl SkillVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Skill => "skill",
        }
    }

    /// `skill` (any case) selects [`SkillVariant::Skill`]; anything else is a command.
    #[must_use]
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some(value) if value.eq_ignore_ascii_case("skill") => Self::Skill,
            _ => Self::Command,
        }
    }
}

/// A parsed skill or command definition.
///
/// `name` is empty when the document had no frontmatter; callers prompt for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub body: String,
    pub variant: SkillVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_model_invocation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Parse a skill document.
///
/// Without frontmatter the whole trimmed text becomes the body of an unnamed
/// command. With frontmatter, `name` and a non-empty body are required.
///
/// # Errors
///
/// [`ParseError::EmptyContent`] for blank input, [`ParseError::MissingField`]
/// when `name` is absent, and [`ParseError::EmptyBody`] when nothing follows
/// the block.
pub fn parse_skill_document(text: &str) -> Result<SkillRecord, ParseError> {
    let Some(frontmatter) = extract_frontmatter(text) else {
        let body = text.trim();
        if body.is_empty() {
            return Err(ParseError::EmptyContent);
        }
        debug!("skill document has no frontmatter");
        return Ok(SkillRecord {
            body: body.to_string(),
            ..SkillRecord::default()
        });
    };

    let fields = Fields::from_metadata(&frontmatter.metadata);
    let name = fields.owned(FieldKey::Name).ok_or(ParseError::MissingField {
        field: FieldKey::Name.canonical_name(),
    })?;
    if frontmatter.body.is_empty() {
        return Err(ParseError::EmptyBody);
    }

    let disable_model_invocation = fields
        .get(FieldKey::DisableModelInvocation)
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));

    Ok(SkillRecord {
        name,
        description: fields.owned(FieldKey::Description),
        body: frontmatter.body,
        variant: SkillVariant::from_field(fields.get(FieldKey::SkillType)),
        allowed_tools: fields.list(FieldKey::AllowedTools, split_commas_or_whitespace),
        argument_hint: fields.owned(FieldKey::ArgumentHint),
        model: fields.owned(FieldKey::Model),
        disable_model_invocation: Some(disable_model_invocation),
        tags: fields.list(FieldKey::Tags, split_commas),
    })
}
