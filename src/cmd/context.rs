// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Print and save modes.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::types::OutputConfig;
use crate::context::ContextCollector;
use crate::context::output::{to_json, write_context};
use crate::error::Result;

/// Collects the context and prints it to stdout.
///
/// # Errors
///
/// Returns an error if the working or home directory cannot be determined.
pub async fn run_print_command(collector: &ContextCollector, output: &OutputConfig) -> Result<()> {
    let record = collector.collect().await?;
    println!("{}", to_json(&record, output.indent)?);
    Ok(())
}

/// Collects the context and writes it to `target`, or to `output.file`
/// when no target is given. Prints a confirmation line naming the file.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if collection fails or the file cannot be written.
pub async fn run_save_command(
    collector: &ContextCollector,
    output: &OutputConfig,
    target: Option<&Path>,
) -> Result<PathBuf> {
    let path = target.unwrap_or(output.file.as_path()).to_path_buf();
    let record = collector.collect().await?;
    write_context(&record, &path, output.indent)?;
    debug!(path = %path.display(), "context written");
    println!("Context saved to {}", path.display());
    Ok(path)
}
