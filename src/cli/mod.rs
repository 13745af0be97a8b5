//! Command-line interface for bonfire.
//!
//! Provides the `ignite` command, the banner, and the end-of-run report.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
