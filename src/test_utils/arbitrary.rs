use proptest::prelude::*;

use crate::connection::{ConnectionDescriptor, StringMap, Transport};

fn arb_transport() -> impl Strategy<Value = Transport> {
    prop_oneof![
        Just(Transport::Stdio),
        Just(Transport::Sse),
        Just(Transport::Http),
    ]
}

fn arb_string_map() -> impl Strategy<Value = StringMap> {
    prop::collection::btree_map("[A-Z][A-Z0-9_]{0,12}", "[ -~]{0,24}", 0..4)
}

/// Generate an arbitrary server name.
pub fn arb_server_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,20}".prop_filter("wrapper keys are not server names", |name| {
        name != "servers" && name != "mcpServers"
    })
}

/// Generate an arbitrary descriptor with a valid endpoint for its transport.
pub fn arb_descriptor() -> impl Strategy<Value = ConnectionDescriptor> {
    (
        arb_server_name(),
        arb_transport(),
        "[a-z][a-z0-9./-]{0,20}",
        prop::collection::vec("[ -~]{0,16}", 0..4),
        "https://[a-z]{1,12}\\.example/[a-z/]{0,12}",
        prop::option::of(arb_string_map()),
        prop::option::of(arb_string_map()),
    )
        .prop_map(|(name, transport, command, args, url, headers, env)| {
            let descriptor = match transport {
                Transport::Stdio => ConnectionDescriptor::stdio(name, command, args),
                Transport::Sse => ConnectionDescriptor::sse(name, url),
                Transport::Http => ConnectionDescriptor::http(name, url),
            };
            let descriptor = match headers {
                Some(headers) => descriptor.with_headers(headers),
                None => descriptor,
            };
            match env {
                Some(env) => descriptor.with_env(env),
                None => descriptor,
            }
        })
}

/// Generate arbitrary free-form clipboard text.
pub fn arb_clipboard_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,200}",
        "claude mcp add[ -~\n\\\\]{0,120}",
        "claude mcp add-json [ -~]{0,120}",
        "[{\\[][ -~\n]{0,120}",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{parse_json_config, JsonShape};

    proptest! {
        #[test]
        fn inline_json_round_trips(descriptor in arb_descriptor()) {
            let text = descriptor.to_inline_json().to_string();
            let (shape, servers) = parse_json_config(&text, &descriptor.name).unwrap();
            prop_assert_eq!(shape, JsonShape::Inline);
            prop_assert_eq!(servers, vec![descriptor]);
        }

        #[test]
        fn named_json_round_trips(descriptor in arb_descriptor()) {
            let text = descriptor.to_named_json().to_string();
            let (_, servers) = parse_json_config(&text, "unused").unwrap();
            prop_assert_eq!(servers, vec![descriptor]);
        }

        #[test]
        fn clipboard_text_never_panics(text in arb_clipboard_text()) {
            let _ = crate::parse_connection_text(&text);
        }
    }
}
