// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ctxgen using clap derive.
//!
//! # Modes
//!
//! ```text
//! ctxgen [global options]                    print context to stdout
//! ctxgen [global options] --save [-o FILE]   save context to context.json
//! ctxgen --help                              show usage
//! ```
//!
//! The arguments are parsed once into a [`Mode`]; anything clap does not
//! recognize is a usage error.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Execution Context Generator
///
/// Collects a snapshot of the local execution environment as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "ctxgen",
    author,
    version,
    about = "Execution Context Generator",
    long_about = "ctxgen Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Collects the working directory, home directory, operating\n\
                  system, current UTC time and login shell into one JSON record.",
    disable_help_flag = true,
    after_help = "MODES:\n\n  \
                  ctxgen              Print context to stdout\n  \
                  ctxgen --save       Save context to context.json\n  \
                  ctxgen --help       Show this help\n\n\
                  Fields that cannot be determined are reported as \"unknown\"\n\
                  (shell), \"Unknown\" (Linux distribution) or \"N/A\" (distribution\n\
                  on other platforms)."
)]
pub struct Cli {
    /// Global options shared by all modes
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Save the context to a file instead of printing it.
    #[arg(long)]
    pub save: bool,

    /// File written by --save (default: context.json in the current directory).
    #[arg(short = 'o', long = "output", value_name = "FILE", requires = "save")]
    pub output: Option<PathBuf>,

    /// Print help.
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

/// What the invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Collect and print to stdout.
    Print,
    /// Collect and write to a file.
    Save,
    /// Print usage; collect nothing.
    Help,
}

impl Cli {
    /// Resolves the mode. `--help` wins over `--save`.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.help {
            Mode::Help
        } else if self.save {
            Mode::Save
        } else {
            Mode::Print
        }
    }
}

/// Fixed usage text covering every mode.
#[must_use]
pub fn usage_text() -> String {
    Cli::command().render_long_help().to_string()
}

/// Parses command-line arguments.
///
/// Exits with a usage error on unknown arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if version
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
