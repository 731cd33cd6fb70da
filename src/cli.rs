//! Command-line interface definitions for PassForge.
//!
//! This module defines the public CLI surface of PassForge using `clap`.
//! It contains no application logic and exists solely to describe how
//! users interact with the program from the terminal.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "passforge",
    version = "0.1",
    about = "A small command-line password generator",
    long_about = r#"
PassForge generates random passwords from a chosen length and a set of
character-class toggles.

Every enabled class is guaranteed to appear at least once in the output,
and the rest of the password is sampled from the union of the enabled
classes before the whole thing is shuffled.

Typical usage:
  passforge                  Interactive form
  passforge gen              One 12-character password
  passforge gen -l 20 -s -c  20 characters incl. symbols, copied to clipboard

Nothing is stored: each run produces a fresh password and forgets it.
"#
)]
pub struct Cli {
    /// Subcommand to execute; the interactive form runs when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one password and print it
    ///
    /// By default, generates a 12-character password using uppercase,
    /// lowercase, and digits. Symbols are opt-in. At least one character
    /// class must remain enabled.
    Gen(GenArgs),

    /// Run the interactive generator form
    ///
    /// Shows the current length, class toggles, and the last generated
    /// password, and regenerates or copies on single-letter commands.
    /// This is also what runs when no subcommand is given.
    Interactive,
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Length of the generated password
    #[arg(
        short,
        long,
        default_value_t = 12,
        value_parser = clap::value_parser!(u8).range(8..=32)
    )]
    pub length: u8,

    /// Exclude uppercase characters (A–Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase characters (a–z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits (0–9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Include symbols (e.g. !@#$%)
    #[arg(short, long)]
    pub symbols: bool,

    /// Copy the generated password to the clipboard for 10 seconds
    #[arg(short, long)]
    pub copy: bool,
}
