//! Shared test utilities for ccimport.

pub mod arbitrary;
pub mod fixtures;

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Run table-driven tests, reporting the failing case by name.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F)
where
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E,
{
    for case in cases {
        println!("[TEST] Running: {}", case.name);
        println!("[TEST] Input: {:?}", case.input);

        let actual = test_fn(case.input.clone());

        println!("[TEST] Expected: {:?}", case.expected);
        println!("[TEST] Actual: {actual:?}");

        assert_eq!(actual, case.expected, "Test '{}' failed", case.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{parse_connection_text, Transport};
    use crate::error::ParseErrorKind;

    fn outcome(input: &str) -> Result<Vec<Transport>, ParseErrorKind> {
        parse_connection_text(input)
            .map(|servers| servers.iter().map(|server| server.transport()).collect())
            .map_err(|err| err.kind())
    }

    #[test]
    fn importer_outcomes_table() {
        let cases = vec![
            TestCase {
                name: "shell add",
                input: "claude mcp add a -- run",
                expected: Ok(vec![Transport::Stdio]),
            },
            TestCase {
                name: "shell add remote",
                input: "claude mcp add -t sse a https://a/sse",
                expected: Ok(vec![Transport::Sse]),
            },
            TestCase {
                name: "add-json http",
                input: r#"claude mcp add-json a '{"type":"streamable-http","url":"https://a"}'"#,
                expected: Ok(vec![Transport::Http]),
            },
            TestCase {
                name: "two servers",
                input: r#"{"mcpServers":{"a":{"command":"a"},"b":{"url":"https://b"}}}"#,
                expected: Ok(vec![Transport::Stdio, Transport::Http]),
            },
            TestCase {
                name: "empty",
                input: "",
                expected: Err(ParseErrorKind::EmptyContent),
            },
            TestCase {
                name: "prose",
                input: "please add my server",
                expected: Err(ParseErrorKind::UnrecognizedFormat),
            },
            TestCase {
                name: "json without servers",
                input: r#"{"version": 2}"#,
                expected: Err(ParseErrorKind::UnrecognizedFormat),
            },
            TestCase {
                name: "broken json",
                input: "{\"mcpServers\": ",
                expected: Err(ParseErrorKind::MalformedEmbeddedPayload),
            },
            TestCase {
                name: "no command",
                input: "claude mcp add a --",
                expected: Err(ParseErrorKind::MissingRequiredField),
            },
        ];

        run_table_tests(cases, outcome);
    }
}
