// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for ctxgen.
//!
//! # Config Structure
//!
//! ```text
//! [probe]   default_shell, os_release
//! [output]  file, indent
//! [log]     level, file_level, file
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Shell used when `SHELL` is not set.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Release file scanned for the distribution name on Linux.
pub const DEFAULT_OS_RELEASE: &str = "/etc/os-release";

/// File written by save mode.
pub const DEFAULT_OUTPUT_FILE: &str = "context.json";

/// Largest accepted JSON indentation width.
pub const MAX_INDENT: usize = 8;

/// Probe options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Shell path used when `SHELL` is unset.
    pub default_shell: PathBuf,
    /// Path of the `os-release` file read on Linux.
    pub os_release: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            default_shell: PathBuf::from(DEFAULT_SHELL),
            os_release: PathBuf::from(DEFAULT_OS_RELEASE),
        }
    }
}

/// Output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination of save mode, relative to the working directory.
    pub file: PathBuf,
    /// Spaces per indentation level in the emitted JSON.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            indent: 2,
        }
    }
}

impl OutputConfig {
    /// Checks that the indentation width is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `indent` exceeds [`MAX_INDENT`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue {
                section: "output".to_string(),
                key: "indent".to_string(),
                message: format!("indent must be 0-{MAX_INDENT}, got {}", self.indent),
            });
        }
        Ok(())
    }
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console (stderr) log level (0-6).
    pub level: LogLevel,
    /// Log file level (0-6).
    pub file_level: LogLevel,
    /// Optional log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::WARN,
            file_level: LogLevel::TRACE,
            file: None,
        }
    }
}
