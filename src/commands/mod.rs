//! Command dispatch layer for PassForge.
//!
//! This module maps parsed CLI commands to their concrete implementations.
//! Each command lives in its own file and exposes a single `run()` function.

use crate::cli::{Cli, Commands};

pub mod gen;
pub mod interactive;

pub fn dispatch(cli: Cli) {
    match cli.command {
        Some(Commands::Gen(args)) => gen::run(args),
        Some(Commands::Interactive) | None => interactive::run(),
    }
}
