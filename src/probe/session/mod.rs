// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working directory, home directory and clock.
//!
//! Unlike the shell and OS probes these lookups have no placeholder:
//! a failure aborts the whole collection.

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

use crate::context::record::DirectoryState;
use crate::error::ProbeError;

/// Reads the current and home directories.
///
/// # Errors
///
/// Returns `ProbeError::CurrentDir` if the working directory cannot be read
/// (e.g. it was deleted) and `ProbeError::MissingDirectory` if no home
/// directory is known for the invoking user.
pub fn directory_state() -> Result<DirectoryState, ProbeError> {
    let pwd = std::env::current_dir().map_err(ProbeError::CurrentDir)?;
    let home = dirs::home_dir().ok_or(ProbeError::MissingDirectory { what: "home" })?;
    Ok(DirectoryState {
        pwd: path_string(&pwd),
        home: path_string(&home),
    })
}

/// Current instant as an ISO 8601 UTC timestamp.
#[must_use]
pub fn current_time() -> String {
    format_timestamp(Utc::now())
}

/// `2026-10-15T08:30:12.123456+00:00`: microseconds, explicit offset.
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests;
