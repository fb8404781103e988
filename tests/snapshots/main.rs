//! Snapshot tests for user-facing messages and encoded output.

mod error_messages;
mod import_output;
