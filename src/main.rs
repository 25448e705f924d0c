//! # pygame-ios CLI
//!
//! This is the binary entry point for the `pygame-ios` command-line tool.
//!
//! It parses the command line with `clap`, then hands a validated
//! configuration to the run command. Errors propagate out of `main`, so a
//! failed run exits with status 1 and prints the error chain.
//!
//! The provisioning and merge logic lives in the `pygame_ios` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
