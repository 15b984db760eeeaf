// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result  <-- main, cmd, config, context
//!       ^
//!       |  typed sources
//!   +---+-------+---------+---------+
//!   |           |         |         |
//! Probe     Process    Config    Output
//!   MissingDirectory, CurrentDir, ReadFile, MissingKey,
//!   UnexpectedOutput, Process
//!           ExecutableNotFound, SpawnFailed, NonZeroExit, OutputError
//!                      InvalidValue
//!                                Serialize, WriteFailed
//! ```
//!
//! Probe errors never leave the probe boundary, except for the directory
//! lookups: they are logged at debug level and replaced with placeholders.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Probe Errors ---

/// Environment probe errors.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A directory lookup (cwd, home) failed.
    #[error("cannot determine {what} directory")]
    MissingDirectory { what: &'static str },

    /// Failed to read the current working directory.
    #[error("failed to read current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Failed to read a system identification file.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A probed file had no usable entry.
    #[error("no '{key}' entry in '{path}'")]
    MissingKey { path: String, key: String },

    /// Command output did not have the expected shape.
    #[error("unexpected output from '{command}': {output:?}")]
    UnexpectedOutput { command: String, output: String },

    /// The probe subprocess failed.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Output Errors ---

/// Errors raised while emitting the context record.
#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON serialization failed.
    #[error("failed to serialize context: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the output file failed.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
