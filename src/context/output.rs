// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON rendering of the context record.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

use crate::error::OutputError;

/// Serializes `value` as pretty JSON indented by `indent` spaces.
///
/// No trailing newline is appended.
///
/// # Errors
///
/// Returns `OutputError::Serialize` if `value` cannot be represented as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String, OutputError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes `value` to `path` as pretty JSON, replacing any existing file.
///
/// # Errors
///
/// Returns `OutputError::Serialize` if serialization fails and
/// `OutputError::WriteFailed` if the file cannot be written.
pub fn write_context<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    indent: usize,
) -> Result<(), OutputError> {
    let json = to_json(value, indent)?;
    std::fs::write(path, json).map_err(|source| OutputError::WriteFailed {
        path: path.display().to_string(),
        source,
    })
}
