pub mod app;
pub mod cli;
pub mod config;
pub mod connection;
pub mod error;
pub mod frontmatter;

#[cfg(test)]
pub mod test_utils;

pub use connection::{parse_connection_text, ConnectionDescriptor, Transport};
pub use error::{CcError, ParseError, ParseErrorKind, Result};
pub use frontmatter::{parse_agent_document, parse_skill_document, AgentRecord, SkillRecord};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
