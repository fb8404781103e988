use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{extract_frontmatter, split_commas, FieldKey, Fields};
use crate::error::ParseError;

/// A parsed agent definition.
///
/// `name` and `description` are both empty when the document had no
/// frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub name: String,
    pub description: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Parse an agent document.
///
/// # Errors
///
/// [`ParseError::EmptyContent`] for blank input, [`ParseError::MissingField`]
/// when `name` or `description` is absent (name checked first), and
/// [`ParseError::EmptyBody`] when nothing follows the block.
pub fn parse_agent_document(text: &str) -> Result<AgentRecord, ParseError> {
    let Some(frontmatter) = extract_frontmatter(text) else {
        let body = text.trim();
        if body.is_empty() {
            return Err(ParseError::EmptyContent);
        }
        debug!("agent document has no frontmatter");
        return Ok(AgentRecord {
            body: body.to_string(),
            ..AgentRecord::default()
        });
    };

    let fields = Fields::from_metadata(&frontmatter.metadata);
    let required = |field: FieldKey| {
        fields.owned(field).ok_or(ParseError::MissingField {
            field: field.canonical_name(),
        })
    };
    let name = required(FieldKey::Name)?;
    let description = required(FieldKey::Description)?;
    if frontmatter.body.is_empty() {
        return Err(ParseError::EmptyBody);
    }

    Ok(AgentRecord {
        name,
        description,
        body: frontmatter.body,
        tools: fields.list(FieldKey::Tools, split_commas),
        model: fields.owned(FieldKey::Model),
        permission_mode: fields.owned(FieldKey::PermissionMode),
        skills: fields.list(FieldKey::Skills, split_commas),
        tags: fields.list(FieldKey::Tags, split_commas),
    })
}
