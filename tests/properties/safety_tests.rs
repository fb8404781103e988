//! Property-based tests for safety - parsers never panic on arbitrary input.

use proptest::prelude::*;

use ccimport::{parse_agent_document, parse_connection_text, parse_skill_document};

proptest! {
    #[test]
    fn importer_never_panics(text in ".{0,300}") {
        let _ = parse_connection_text(&text);
    }

    #[test]
    fn importer_never_panics_on_prefixed_noise(tail in "[ -~\n\\\\'\"]{0,200}") {
        let _ = parse_connection_text(&format!("claude mcp add {tail}"));
        let _ = parse_connection_text(&format!("claude mcp add-json {tail}"));
        let _ = parse_connection_text(&format!("{{{tail}"));
    }

    #[test]
    fn document_parsers_never_panic(text in ".{0,300}") {
        let _ = parse_skill_document(&text);
        let _ = parse_agent_document(&text);
    }

    #[test]
    fn document_parsers_never_panic_inside_frontmatter(
        header in "[ -~\n]{0,120}",
        body in ".{0,80}",
    ) {
        let text = format!("---\n{header}\n---\n{body}");
        let _ = parse_skill_document(&text);
        let _ = parse_agent_document(&text);
    }

    #[test]
    fn plain_text_becomes_the_skill_body(body in "[a-zA-Z][a-zA-Z0-9 .,]{0,80}") {
        let skill = parse_skill_document(&body).unwrap();
        prop_assert_eq!(skill.name, "");
        prop_assert_eq!(skill.body, body.trim());
    }
}
