// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Help mode.

use crate::cli::usage_text;

/// Prints the usage text. Collects nothing and touches no files.
pub fn run_help_command() {
    println!("{}", usage_text().trim_end());
}
