// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for ctxgen.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ctxgen.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. CTXGEN_* env vars
//! 5. CLI overrides (--log-level, --output, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CTXGEN_PROBE__DEFAULT_SHELL=/bin/zsh → probe.default_shell
//! CTXGEN_PROBE__OS_RELEASE=/tmp/rel    → probe.os_release
//! CTXGEN_OUTPUT__FILE=ctx.json         → output.file
//! CTXGEN_LOG__LEVEL=4                  → log.level
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{LogSettings, OutputConfig, ProbeConfig};

/// Name of the optional configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "ctxgen.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CTXGEN";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Probe options.
    pub probe: ProbeConfig,
    /// Output options.
    pub output: OutputConfig,
    /// Logging options.
    pub log: LogSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ctxgen::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("ctxgen.toml")
    ///     .with_env_prefix("CTXGEN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates values that serde alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds an out-of-range value.
    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;
        Ok(())
    }
}
