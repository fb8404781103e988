//! Properties of the connection importer across dialects.

use proptest::prelude::*;

use ccimport::connection::{parse_json_config, to_mcp_servers_json, ConnectionDescriptor};
use ccimport::{parse_connection_text, Transport};

fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./@:=-]{1,16}"
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,16}"
}

fn arb_env() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Z][A-Z0-9_]{0,10}", "[a-z0-9/._-]{0,12}"), 0..4)
}

proptest! {
    #[test]
    fn shell_add_keeps_command_words_exactly(
        name in arb_name(),
        command in "[a-z][a-z0-9_-]{0,12}",
        args in prop::collection::vec(arb_word(), 0..6),
    ) {
        let line = format!("claude mcp add {name} -- {command} {}", args.join(" "));
        let servers = parse_connection_text(&line).unwrap();
        prop_assert_eq!(servers.len(), 1);
        prop_assert_eq!(&servers[0].name, &name);
        prop_assert_eq!(servers[0].command(), Some(command.as_str()));
        prop_assert_eq!(servers[0].args(), args.as_slice());
    }

    #[test]
    fn shell_add_env_flags_are_collected(name in arb_name(), env in arb_env()) {
        let flags: String = env
            .iter()
            .map(|(key, value)| format!(" -e {key}={value}"))
            .collect();
        let line = format!("claude mcp add {name}{flags} -- run");
        let servers = parse_connection_text(&line).unwrap();

        let expected: std::collections::BTreeMap<String, String> = env.into_iter().collect();
        if expected.is_empty() {
            prop_assert!(servers[0].env.is_none());
        } else {
            prop_assert_eq!(servers[0].env.as_ref(), Some(&expected));
        }
    }

    #[test]
    fn line_continuations_do_not_change_the_result(
        name in arb_name(),
        args in prop::collection::vec(arb_word(), 1..5),
    ) {
        let flat = format!("claude mcp add {name} -- node {}", args.join(" "));
        let wrapped = format!("claude mcp add {name} \\\n  -- node \\\n    {}", args.join(" \\\n    "));
        prop_assert_eq!(parse_connection_text(&flat).unwrap(), parse_connection_text(&wrapped).unwrap());
    }

    #[test]
    fn add_json_matches_named_json(name in arb_name(), url_path in "[a-z]{1,10}") {
        prop_assume!(name != "servers");
        let config = format!(r#"{{"type":"sse","url":"https://host.example/{url_path}"}}"#);
        let shell = format!("claude mcp add-json {name} '{config}'");
        let named = format!(r#"{{"{name}": {config}}}"#);
        prop_assert_eq!(parse_connection_text(&shell).unwrap(), parse_connection_text(&named).unwrap());
    }

    #[test]
    fn json_shapes_agree(
        command in "[a-z]{1,8}",
        args in prop::collection::vec("[a-z0-9-]{1,8}", 0..4),
    ) {
        let config = serde_json::json!({ "command": command, "args": args }).to_string();
        let shapes = [
            format!(r#"{{"mcpServers": {{"imported-mcp": {config}}}}}"#),
            format!(r#"{{"servers": {{"imported-mcp": {config}}}}}"#),
            config.clone(),
            format!(r#"{{"imported-mcp": {config}}}"#),
        ];
        let expected = vec![ConnectionDescriptor::stdio("imported-mcp", command, args)];
        for text in &shapes {
            prop_assert_eq!(&parse_connection_text(text).unwrap(), &expected);
        }
    }

    #[test]
    fn mcp_servers_wrapper_round_trips(
        names in prop::collection::btree_set(arb_name(), 1..5),
        command in "[a-z]{1,8}",
    ) {
        let descriptors: Vec<ConnectionDescriptor> = names
            .iter()
            .filter(|name| name.as_str() != "servers")
            .map(|name| ConnectionDescriptor::stdio(name.clone(), command.clone(), vec!["--stdio".to_string()]))
            .collect();
        prop_assume!(!descriptors.is_empty());

        let text = to_mcp_servers_json(&descriptors).to_string();
        let (_, servers) = parse_json_config(&text, "unused").unwrap();
        prop_assert_eq!(servers, descriptors);
    }

    #[test]
    fn url_inference_prefers_sse_marker(host in "[a-z]{1,10}", path in "[a-z]{0,10}") {
        prop_assume!(!host.contains("sse") && !path.contains("sse"));
        let plain = parse_connection_text(&format!(r#"{{"url":"https://{host}.example/{path}"}}"#)).unwrap();
        let sse = parse_connection_text(&format!(r#"{{"url":"https://{host}.example/sse/{path}"}}"#)).unwrap();
        prop_assert_eq!(plain[0].transport(), Transport::Http);
        prop_assert_eq!(sse[0].transport(), Transport::Sse);
    }
}
