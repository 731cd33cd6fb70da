//! PassForge, a small command-line password generator.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Initializing logging
//! - Parsing CLI arguments
//! - Dispatching subcommands
//!
//! All command implementations live in `commands/`, the generation
//! algorithm in `generator.rs`, and user interaction helpers in `ui.rs`.

use clap::Parser;

mod cli;
mod commands;
mod generator;
mod ui;

fn main() {
    env_logger::init();

    let cli = cli::Cli::parse();
    commands::dispatch(cli);
}
