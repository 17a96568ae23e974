//! Integration tests for autocue

mod cli_test;
mod config_test;
mod helpers;
mod report_test;
mod sync_test;
mod transcript_test;
