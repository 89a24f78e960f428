//! Integration tests for the modrules CLI.

mod common;
mod resolve_tests;
mod table_tests;
