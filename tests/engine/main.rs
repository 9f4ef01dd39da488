// Integration tests for purge
// Real filesystem trees under tempfile scratch directories

mod cli_tests;
mod delete_tests;
