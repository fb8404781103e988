//! Property-based tests for the importer and document parsers.

mod import_tests;
mod safety_tests;
